//! Sample records used to seed the in-memory store and the `seed` command.

use url::Url;
use uuid::Uuid;

use super::WaterSource;
use crate::geo::Location;

pub const WATERSOURCE_A: Uuid = Uuid::from_u128(0x6f1c_2a44_0b8e_4d2a_9c31_5e7a_0d11_aa01);
pub const WATERSOURCE_B: Uuid = Uuid::from_u128(0x6f1c_2a44_0b8e_4d2a_9c31_5e7a_0d11_bb02);
pub const WATERSOURCE_C: Uuid = Uuid::from_u128(0x6f1c_2a44_0b8e_4d2a_9c31_5e7a_0d11_cc03);

const SEED: [(Uuid, &str, &str, f64, f64, f64, f64, f64); 3] = [
    (
        WATERSOURCE_A,
        "Watersource A",
        "https://www.totalsoftwater.com/wp-content/uploads/2017/08/wells-2212974_1280-180x180.jpg",
        34.218,
        -77.946,
        100.0,
        54.0,
        0.0,
    ),
    (
        WATERSOURCE_B,
        "Watersource B",
        "https://thumbs.dreamstime.com/t/old-water-well-pulley-bucket-49458732.jpg",
        33.412,
        -78.603,
        0.0,
        0.0,
        0.0,
    ),
    (
        WATERSOURCE_C,
        "Watersource C",
        "https://thumbs.dreamstime.com/t/draw-water-well-various-objects-spring-season-best-wonderful-period-81954677.jpg",
        31.874,
        -76.391,
        0.0,
        0.0,
        0.0,
    ),
];

/// The three demo water sources.
///
/// Entries whose image URL fails to parse are skipped.
pub fn sample_watersources() -> Vec<WaterSource> {
    SEED.iter()
        .filter_map(
            |&(id, title, image, latitude, longitude, boiled, disinfected, filtered)| {
                let image_url = Url::parse(image).ok()?;
                Some(WaterSource {
                    id,
                    title: title.to_string(),
                    image_url,
                    location: Location::new(latitude, longitude),
                    percent_boiled: boiled,
                    percent_disinfected: disinfected,
                    percent_filtered: filtered,
                })
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Region;

    #[test]
    fn seeds_three_unique_records() {
        let records = sample_watersources();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id, WATERSOURCE_A);
        assert_ne!(records[1].id, records[2].id);
    }

    #[test]
    fn seed_locations_fall_inside_initial_region() {
        for record in sample_watersources() {
            assert!(Region::WILMINGTON.contains(record.location), "{}", record.title);
        }
    }

    #[test]
    fn only_first_record_has_progress() {
        let records = sample_watersources();
        assert_eq!(records[0].percent_disinfected, 54.0);
        assert!(records.iter().all(|r| !r.is_complete()));
    }
}
