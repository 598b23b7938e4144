use tracing::{debug, warn};

use crate::models::error::SnmpApiError;
use crate::snmp::is_valid_oid;

use super::{CommandCatalog, CommandDefinition, Operation, ResolvedCommand, Vendor};

/// Разрешает пользовательский ввод (имя команды, алиас или буквальный
/// OID) в цель запроса.
///
/// Порядок важен: синтаксически валидный числовой OID всегда трактуется
/// буквально, до похода в каталог. Алиасы в каталоге не бывают числовыми,
/// так что реальной неоднозначности нет, но приоритет фиксирован.
pub fn resolve(catalog: &CommandCatalog, input: &str) -> Result<ResolvedCommand, SnmpApiError> {
    if is_valid_oid(input) {
        debug!(oid = input, "Прямой OID запрос");
        return Ok(ResolvedCommand {
            oid: input.to_string(),
            operation: Operation::Get,
            command: CommandDefinition {
                name: "direct_oid".to_string(),
                description: "Direct OID query".to_string(),
                oid: input.to_string(),
                operation: Operation::Get,
                vendor: Vendor::Generic,
                aliases: Vec::new(),
            },
        });
    }

    let Some(command) = catalog.lookup_by_name(input) else {
        warn!(command = input, "Неизвестная SNMP команда");
        return Err(SnmpApiError::UnknownCommand(input.to_string()));
    };

    debug!(
        command = input,
        oid = %command.oid,
        operation = command.operation.as_str(),
        "Команда разрешена"
    );

    Ok(ResolvedCommand {
        oid: command.oid.clone(),
        operation: command.operation,
        command: command.clone(),
    })
}
