use chrono::{DateTime, Datelike, Utc};
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Haiku {
    pub japanese: [&'static str; 3],
    pub romaji: [&'static str; 3],
    pub english: [&'static str; 3],
    pub author: &'static str,
    pub author_japanese: &'static str,
}

const BASHO: (&str, &str) = ("Matsuo Bashō", "松尾芭蕉");
const BUSON: (&str, &str) = ("Yosa Buson", "与謝蕪村");
const ISSA: (&str, &str) = ("Kobayashi Issa", "小林一茶");
const SHIKI: (&str, &str) = ("Masaoka Shiki", "正岡子規");

const fn haiku(
    japanese: [&'static str; 3],
    romaji: [&'static str; 3],
    english: [&'static str; 3],
    by: (&'static str, &'static str),
) -> Haiku {
    Haiku {
        japanese,
        romaji,
        english,
        author: by.0,
        author_japanese: by.1,
    }
}

const HAIKUS: [Haiku; 10] = [
    haiku(
        ["古池や", "蛙飛び込む", "水の音"],
        ["furuike ya", "kawazu tobikomu", "mizu no oto"],
        [
            "An old silent pond",
            "A frog jumps into the pond",
            "Splash! Silence again",
        ],
        BASHO,
    ),
    haiku(
        ["閑さや", "岩にしみ入る", "蝉の声"],
        ["shizukasa ya", "iwa ni shimiiru", "semi no koe"],
        ["Such stillness", "The cries of the cicadas", "Sink into the rocks"],
        BASHO,
    ),
    haiku(
        ["菜の花や", "月は東に", "日は西に"],
        ["na no hana ya", "tsuki wa higashi ni", "hi wa nishi ni"],
        ["Canola flowers", "The moon in the east", "The sun in the west"],
        BUSON,
    ),
    haiku(
        ["春の海", "ひねもすのたり", "のたりかな"],
        ["haru no umi", "hinemosu notari", "notari kana"],
        ["The spring sea", "Rising and falling", "All day long"],
        BUSON,
    ),
    haiku(
        ["痩蛙", "負けるな一茶", "これにあり"],
        ["yasegaeru", "makeruna issa", "kore ni ari"],
        ["Lean frog", "Don't give up the fight", "Issa is here"],
        ISSA,
    ),
    haiku(
        ["雪とけて", "村いっぱいの", "子どもかな"],
        ["yuki tokete", "mura ippai no", "kodomo kana"],
        ["Snow melting", "The village overflows", "With children"],
        ISSA,
    ),
    haiku(
        ["柿くへば", "鐘が鳴るなり", "法隆寺"],
        ["kaki kueba", "kane ga narunari", "hōryūji"],
        ["I eat a persimmon", "And the bell rings", "At Hōryūji"],
        SHIKI,
    ),
    haiku(
        ["夏草や", "兵どもが", "夢の跡"],
        ["natsukusa ya", "tsuwamono domo ga", "yume no ato"],
        ["Summer grasses", "All that remains", "Of warriors' dreams"],
        BASHO,
    ),
    haiku(
        ["荒海や", "佐渡によこたふ", "天の川"],
        ["araumi ya", "sado ni yokotau", "amanogawa"],
        ["Rough sea", "Stretching to Sado", "The Milky Way"],
        BASHO,
    ),
    haiku(
        ["五月雨を", "あつめて早し", "最上川"],
        ["samidare wo", "atsumete hayashi", "mogamigawa"],
        [
            "Gathering the rains",
            "Of May, how swift it is",
            "The Mogami River",
        ],
        BASHO,
    ),
];

#[must_use]
pub fn haikus() -> &'static [Haiku] {
    &HAIKUS
}

/// Haiku for the given day; `day_of_year` counts from 1 for Jan 1.
#[must_use]
pub fn haiku_for_day(day_of_year: u32) -> &'static Haiku {
    let idx = day_of_year as usize % HAIKUS.len();
    &HAIKUS[idx]
}

#[must_use]
pub fn daily_haiku(now: DateTime<Utc>) -> &'static Haiku {
    haiku_for_day(now.ordinal())
}

pub fn random_haiku<R: Rng + ?Sized>(rng: &mut R) -> &'static Haiku {
    &HAIKUS[rng.random_range(0..HAIKUS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn jan_first_maps_to_second_entry() {
        let jan1 = Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap();
        assert_eq!(daily_haiku(jan1), &haikus()[1]);
    }

    #[test]
    fn day_ten_wraps_to_first_entry() {
        assert_eq!(haiku_for_day(10), &haikus()[0]);
        assert_eq!(haiku_for_day(366), &haikus()[6]);
        assert_eq!(haiku_for_day(367).author, "Matsuo Bashō");
    }

    #[test]
    fn same_day_gives_same_haiku() {
        let morning = Utc.with_ymd_and_hms(2025, 3, 14, 1, 0, 0).unwrap();
        let evening = Utc.with_ymd_and_hms(2025, 3, 14, 23, 0, 0).unwrap();
        assert_eq!(daily_haiku(morning), daily_haiku(evening));
    }

    #[test]
    fn random_haiku_comes_from_collection() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let pick = random_haiku(&mut rng);
            assert!(haikus().contains(pick));
        }
    }
}
