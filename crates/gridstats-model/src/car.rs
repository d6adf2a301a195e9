//! The car catalog.
//!
//! A closed set of vehicles keyed by a numeric code. Some vehicles are
//! also unlockable as personal variants under a separate personal code;
//! a code appearing in live data must equal some entry's general or
//! personal code. All codes across both keyspaces are unique.

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Car {
    /// General numeric code.
    pub code: i64,
    /// Code of the personal variant, for vehicles that have one.
    pub personal_code: Option<i64>,
    /// Display name, as delivered by the upstream service.
    pub name: &'static str,
}

const fn car(code: i64, name: &'static str) -> Car {
    Car {
        code,
        personal_code: None,
        name,
    }
}

const fn personal(code: i64, personal_code: i64, name: &'static str) -> Car {
    Car {
        code,
        personal_code: Some(personal_code),
        name,
    }
}

/// The full catalog. Personal codes live in the 1000+ keyspace so the
/// two keyspaces can never collide.
pub const CATALOG: &[Car] = &[
    personal(1, 1001, "ЗАЗ-965"),
    personal(2, 1002, "Ока"),
    personal(3, 1003, "Запорожец"),
    car(4, "Инвалидка"),
    personal(5, 1005, "Москвич-412"),
    personal(6, 1006, "ВАЗ-2104"),
    car(7, "УАЗ-469"),
    personal(8, 1008, "Газель"),
    car(9, "ЗИЛ-130"),
    car(10, "КамАЗ"),
    personal(11, 1011, "Победа"),
    personal(12, 1012, "Волга ГАЗ-21"),
    car(13, "Чайка"),
    car(14, "ЗИС-110"),
    personal(15, 1015, "Жук"),
    personal(16, 1016, "Мини"),
    car(17, "Ситроен 2CV"),
    personal(18, 1018, "Форд Т"),
    car(19, "Кадиллак Эльдорадо"),
    car(20, "Линкольн"),
    personal(21, 1021, "Мустанг"),
    personal(22, 1022, "Ягуар E-type"),
    car(23, "Ламборгини"),
    personal(24, 1024, "Феррари"),
    car(25, "Порше 911"),
    personal(26, 1026, "Ауди ТТ"),
    car(27, "ДеЛориан"),
    personal(28, 1028, "Формула-1"),
    car(29, "Болид"),
    car(30, "Хаммер"),
    car(31, "Лимузин"),
    car(32, "Трактор"),
    car(33, "Комбайн"),
    car(34, "Паровоз"),
    personal(35, 1035, "Мотоцикл с коляской"),
    car(36, "Велосипед"),
    car(37, "Самокат"),
    car(38, "Телега"),
    car(39, "Карета"),
    personal(40, 1040, "Каравелла"),
    car(41, "Подводная лодка"),
    car(42, "Воздушный шар"),
    personal(43, 1043, "Ковёр-самолёт"),
    car(44, "Метла"),
    car(45, "НЛО"),
];

impl Car {
    /// Number of catalog entries. Bounds the cars-owned statistic: a
    /// racer owns at least one and at most this many vehicles.
    pub const COUNT: i64 = CATALOG.len() as i64;

    /// Resolve a numeric code against the general or personal keyspace.
    /// Returns `None` for codes outside the catalog.
    pub fn from_code(code: i64) -> Option<&'static Car> {
        CATALOG
            .iter()
            .find(|entry| entry.code == code || entry.personal_code == Some(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn every_code_resolves_to_its_own_entry() {
        for entry in CATALOG {
            assert_eq!(Car::from_code(entry.code), Some(entry));
            if let Some(personal_code) = entry.personal_code {
                assert_eq!(Car::from_code(personal_code), Some(entry));
            }
        }
    }

    #[test]
    fn codes_are_unique_across_both_keyspaces() {
        let mut seen = BTreeSet::new();
        for entry in CATALOG {
            assert!(seen.insert(entry.code), "duplicate code {}", entry.code);
            if let Some(personal_code) = entry.personal_code {
                assert!(
                    seen.insert(personal_code),
                    "duplicate personal code {personal_code}"
                );
            }
        }
    }

    #[test]
    fn unknown_codes_fail() {
        assert_eq!(Car::from_code(0), None);
        assert_eq!(Car::from_code(-7), None);
        assert_eq!(Car::from_code(999), None);
        assert_eq!(Car::from_code(2001), None);
    }

    #[test]
    fn count_matches_catalog_length() {
        assert_eq!(Car::COUNT, CATALOG.len() as i64);
    }
}
