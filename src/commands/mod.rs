use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod resolver;

pub use catalog::{catalog, CommandCatalog};
pub use resolver::resolve;

/// Вид SNMP операции для команды
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Get,
    Walk,
    Bulk,
}

impl Operation {
    /// Имя операции в ответе API
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Get => "GET",
            Operation::Walk => "WALK",
            Operation::Bulk => "BULK",
        }
    }
}

/// Производитель, к которому относится команда. Generic-команды
/// включаются в выборку любого производителя.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    Cisco,
    Juniper,
    Generic,
}

/// Описание команды: дружелюбное имя -> OID + вид операции.
/// Задаётся один раз при старте процесса, не мутируется.
#[derive(Debug, Clone, Serialize)]
pub struct CommandDefinition {
    pub name: String,
    pub description: String,
    pub oid: String,
    pub operation: Operation,
    pub vendor: Vendor,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

/// Форма команды для листинга — без сырого OID
#[derive(Debug, Clone, Serialize)]
pub struct CommandSummary {
    pub name: String,
    pub description: String,
    pub operation: Operation,
    pub vendor: Vendor,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl From<&CommandDefinition> for CommandSummary {
    fn from(cmd: &CommandDefinition) -> Self {
        Self {
            name: cmd.name.clone(),
            description: cmd.description.clone(),
            operation: cmd.operation,
            vendor: cmd.vendor,
            aliases: cmd.aliases.clone(),
        }
    }
}

/// Результат разрешения пользовательского ввода в цель запроса.
/// Живёт в пределах одного запроса.
#[derive(Debug, Clone)]
pub struct ResolvedCommand {
    pub oid: String,
    pub operation: Operation,
    pub command: CommandDefinition,
}
