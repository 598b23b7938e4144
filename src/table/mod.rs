use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::warn;

use crate::snmp::Varbind;

pub mod columns;

pub use columns::resolve_column_name;

/// Строка таблицы: имя колонки -> значение, плюс поле "index"
pub type TableRow = Map<String, Value>;

/// Собирает плоский результат обхода таблицы в строки по индексу.
///
/// Формат табличного OID: base.column.index, например
/// 1.3.6.1.2.1.2.2.1.2.1 = ifDescr.1. Компонент на позиции len(base) —
/// номер колонки, следующий за ним — индекс строки. Первый varbind с
/// новым индексом заводит строку (с полем "index"), последующие только
/// дописывают колонки. Порядок строк — порядок первого появления
/// индекса во входной последовательности.
pub fn normalize(base_oid: &str, varbinds: &[Varbind]) -> Vec<TableRow> {
    let base_len = base_oid.split('.').count();

    let mut rows: Vec<TableRow> = Vec::new();
    let mut by_index: HashMap<String, usize> = HashMap::new();

    for vb in varbinds {
        let parts: Vec<&str> = vb.oid.split('.').collect();

        // OID короче ожидаемого — пропускаем varbind, не весь результат
        let (Some(column), Some(index)) = (parts.get(base_len), parts.get(base_len + 1)) else {
            warn!(oid = %vb.oid, base = base_oid, "Varbind короче table-формата, пропущен");
            continue;
        };

        let row_pos = match by_index.get(*index) {
            Some(&pos) => pos,
            None => {
                let mut row = TableRow::new();
                row.insert("index".to_string(), Value::String(index.to_string()));
                rows.push(row);
                by_index.insert(index.to_string(), rows.len() - 1);
                rows.len() - 1
            }
        };

        let column_name = resolve_column_name(base_oid, column);
        rows[row_pos].insert(column_name, vb.value.clone());
    }

    rows
}
