use anyhow::Result;
use snmp2::Oid;

/// Проверяет, что строка — корректный OID в числовой точечной нотации.
/// Пустые компоненты ("1..2") и любые нецифровые символы — невалидно.
pub fn is_valid_oid(s: &str) -> bool {
    !s.is_empty()
        && s.split('.')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}

/// Эвристика "табличный OID": после отбрасывания завершающей точки
/// заканчивается на ".1" (entry) или на ".2.1". Чисто синтаксическая
/// проверка по форме, без знания MIB — скалярный OID, случайно
/// оканчивающийся на ".1", тоже пройдёт. Поведение ниже по конвейеру
/// завязано на неё как есть, менять нельзя.
pub fn is_table_oid(oid: &str) -> bool {
    let oid = oid.strip_suffix('.').unwrap_or(oid);
    oid.ends_with(".1") || oid.ends_with(".2.1")
}

/// Парсит строку OID в объект Oid
pub fn parse_oid(oid_str: &str) -> Result<Oid<'static>> {
    let parts: Result<Vec<u64>, _> = oid_str
        .trim()
        .split('.')
        .filter(|p| !p.is_empty())
        .map(|p| p.parse::<u64>())
        .collect();

    let parts = parts
        .map_err(|e| anyhow::anyhow!("Не удалось распарсить числа в OID '{}': {}", oid_str, e))?;
    Oid::from(&parts)
        .map_err(|e| anyhow::anyhow!("Не удалось создать Oid из '{}': {:?}", oid_str, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_oids() {
        assert!(is_valid_oid("1.3.6.1.2.1.1.5.0"));
        assert!(is_valid_oid("1.2.3"));
        assert!(is_valid_oid("0.0.0.0"));
        assert!(is_valid_oid("1"));
    }

    #[test]
    fn invalid_oids() {
        assert!(!is_valid_oid("not.a.oid"));
        assert!(!is_valid_oid("1.2.3.a"));
        assert!(!is_valid_oid("1..2.3"));
        assert!(!is_valid_oid(""));
        assert!(!is_valid_oid("1.2."));
        assert!(!is_valid_oid(".1.2"));
        assert!(!is_valid_oid("1.2 .3"));
    }

    #[test]
    fn table_oids() {
        assert!(is_table_oid("1.3.6.1.2.1.2.2.1"));
        assert!(is_table_oid("1.3.6.1.2.1.4.20.1"));
        assert!(is_table_oid("1.2.3.4.1"));
        // завершающая точка отбрасывается
        assert!(is_table_oid("1.3.6.1.2.1.2.2.1."));
    }

    #[test]
    fn non_table_oids() {
        assert!(!is_table_oid("1.3.6.1.2.1.1.5.0"));
        assert!(!is_table_oid("1.3.6.1.2.1.1"));
        assert!(!is_table_oid("1.2.3"));
    }

    #[test]
    fn parse_oid_roundtrip() {
        let oid = parse_oid("1.3.6.1.2.1.1.5.0").unwrap();
        assert_eq!(oid.to_string(), "1.3.6.1.2.1.1.5.0");
        assert!(parse_oid("1.2.x").is_err());
    }
}
