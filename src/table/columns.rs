/// Имя колонки для известной таблицы, иначе синтетическое `col_<n>`.
///
/// Замаплен только IF-MIB::ifEntry — для остальных таблиц тихо
/// откатываемся на синтетические имена, это штатная деградация.
// TODO: добавить маппинг для ipAddrTable (1.3.6.1.2.1.4.20.1)
pub fn resolve_column_name(base_oid: &str, column: &str) -> String {
    let base = base_oid.strip_suffix('.').unwrap_or(base_oid);

    // IF-MIB::ifTable
    if base == "1.3.6.1.2.1.2.2.1" {
        let name = match column {
            "1" => "ifIndex",
            "2" => "ifDescr",
            "3" => "ifType",
            "4" => "ifMtu",
            "5" => "ifSpeed",
            "6" => "ifPhysAddress",
            "7" => "ifAdminStatus",
            "8" => "ifOperStatus",
            "9" => "ifLastChange",
            _ => return format!("col_{}", column),
        };
        return name.to_string();
    }

    format!("col_{}", column)
}
