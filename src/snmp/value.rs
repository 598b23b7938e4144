use serde_json::json;
use snmp2::Value;

/// Конвертирует snmp2 Value в (ASN.1 тег, JSON значение).
/// OctetString отдаём как UTF-8 строку, если байты валидны, иначе hex.
/// IpAddress — как точечную нотацию, как это делает net-snmp.
pub fn to_json(value: &Value<'_>) -> (u8, serde_json::Value) {
    match value {
        Value::Boolean(b) => (1, json!(b)),
        Value::Integer(i) => (2, json!(i)),
        Value::OctetString(bytes) => (4, octet_string_to_json(bytes)),
        Value::Null => (5, serde_json::Value::Null),
        Value::ObjectIdentifier(oid) => (6, json!(oid.to_string())),
        Value::IpAddress(octets) => (
            64,
            json!(format!(
                "{}.{}.{}.{}",
                octets[0], octets[1], octets[2], octets[3]
            )),
        ),
        Value::Counter32(c) => (65, json!(c)),
        Value::Unsigned32(u) => (66, json!(u)),
        Value::Timeticks(t) => (67, json!(t)),
        Value::Opaque(bytes) => (68, octet_string_to_json(bytes)),
        Value::Counter64(c) => (70, json!(c)),
        Value::EndOfMibView => (130, serde_json::Value::Null),
        Value::NoSuchObject => (128, serde_json::Value::Null),
        Value::NoSuchInstance => (129, serde_json::Value::Null),
        // PDU-варианты в varbind'ах не встречаются
        other => (0, json!(format!("{:?}", other))),
    }
}

/// Ответы-исключения, которые не являются данными: такие varbind'ы
/// пропускаются при обходе, а не роняют весь walk.
pub fn is_exception(value: &Value<'_>) -> bool {
    matches!(
        value,
        Value::NoSuchObject | Value::NoSuchInstance | Value::EndOfMibView
    )
}

fn octet_string_to_json(bytes: &[u8]) -> serde_json::Value {
    match std::str::from_utf8(bytes) {
        Ok(s) => json!(s),
        Err(_) => {
            let hex: Vec<String> = bytes.iter().map(|b| format!("{:02x}", b)).collect();
            json!(hex.join(":"))
        }
    }
}
