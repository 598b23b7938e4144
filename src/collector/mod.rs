use tracing::info;

use crate::commands::{Operation, ResolvedCommand};
use crate::config::ConnectionSettings;
use crate::models::{QueryData, SnmpApiError};
use crate::snmp::{is_table_oid, ConnectionParams, SnmpExecutor};
use crate::table;

/// Диспетчер запросов: по разрешённой команде выбирает операцию
/// исполнителя и прогоняет walk-результаты через сборку таблицы,
/// когда цель табличная.
pub struct SnmpCollector {
    connection: ConnectionSettings,
}

impl SnmpCollector {
    pub fn new(connection: ConnectionSettings) -> Self {
        Self { connection }
    }

    pub async fn execute<E: SnmpExecutor + ?Sized>(
        &self,
        executor: &E,
        resolved: &ResolvedCommand,
        params: &ConnectionParams,
        as_table: bool,
    ) -> Result<QueryData, SnmpApiError> {
        let oid = &resolved.oid;

        match resolved.operation {
            Operation::Get => {
                let varbinds = executor
                    .get(params, std::slice::from_ref(oid))
                    .await
                    .map_err(|e| exec_failed(oid, "GET", e))?;

                if varbinds.is_empty() {
                    return Err(exec_failed(
                        oid,
                        "GET",
                        anyhow::anyhow!("агент не вернул данных"),
                    ));
                }

                Ok(QueryData::Varbinds(varbinds))
            }

            Operation::Walk => {
                let varbinds = executor
                    .walk(params, oid, self.connection.max_repetitions)
                    .await
                    .map_err(|e| exec_failed(oid, "WALK", e))?;

                // Таблицу собираем по явному флагу или по форме OID
                if as_table || is_table_oid(oid) {
                    Ok(QueryData::Table(table::normalize(oid, &varbinds)))
                } else {
                    Ok(QueryData::Varbinds(varbinds))
                }
            }

            Operation::Bulk => {
                let varbinds = if executor.supports_bulk() {
                    executor
                        .bulk_walk(
                            params,
                            oid,
                            self.connection.max_repetitions,
                            self.connection.non_repeaters,
                        )
                        .await
                        .map_err(|e| exec_failed(oid, "BULK", e))?
                } else {
                    // Штатная деградация, не ошибка: обычный walk с тем же
                    // лимитом на шаг
                    info!(oid = %oid, "GETBULK недоступен, используем WALK");
                    executor
                        .walk(params, oid, self.connection.max_repetitions)
                        .await
                        .map_err(|e| exec_failed(oid, "BULK", e))?
                };

                Ok(QueryData::Varbinds(varbinds))
            }
        }
    }
}

fn exec_failed(oid: &str, operation: &str, source: anyhow::Error) -> SnmpApiError {
    SnmpApiError::ExecutionFailed {
        oid: oid.to_string(),
        operation: operation.to_string(),
        source,
    }
}
