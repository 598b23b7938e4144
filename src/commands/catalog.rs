use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::error::SnmpApiError;

use super::{CommandDefinition, Operation, Vendor};

/// Каталог команд. Строится один раз при старте, дальше только чтение —
/// безопасен для любого числа параллельных запросов.
pub struct CommandCatalog {
    commands: Vec<CommandDefinition>,
    by_name: HashMap<String, usize>,
}

static CATALOG: LazyLock<CommandCatalog> = LazyLock::new(|| CommandCatalog::new(definitions()));

/// Глобальный каталог команд
pub fn catalog() -> &'static CommandCatalog {
    &CATALOG
}

impl CommandCatalog {
    pub fn new(commands: Vec<CommandDefinition>) -> Self {
        let by_name = commands
            .iter()
            .enumerate()
            .map(|(i, cmd)| (cmd.name.clone(), i))
            .collect();

        Self { commands, by_name }
    }

    /// Ищет команду по основному имени, затем линейным сканом по алиасам.
    /// Первое определение, чей список алиасов содержит имя, выигрывает.
    pub fn lookup_by_name(&self, name: &str) -> Option<&CommandDefinition> {
        if let Some(&i) = self.by_name.get(name) {
            return Some(&self.commands[i]);
        }

        self.commands
            .iter()
            .find(|cmd| cmd.aliases.iter().any(|a| a == name))
    }

    /// Все команды в порядке каталога
    pub fn list_all(&self) -> &[CommandDefinition] {
        &self.commands
    }

    /// Регистронезависимый поиск по имени, описанию и алиасам
    pub fn search(&self, term: &str) -> Vec<&CommandDefinition> {
        let term = term.to_lowercase();

        self.commands
            .iter()
            .filter(|cmd| {
                cmd.name.to_lowercase().contains(&term)
                    || cmd.description.to_lowercase().contains(&term)
                    || cmd.aliases.iter().any(|a| a.to_lowercase().contains(&term))
            })
            .collect()
    }

    /// Команды производителя плюс все generic-команды
    pub fn by_vendor(&self, vendor: Vendor) -> Vec<&CommandDefinition> {
        self.commands
            .iter()
            .filter(|cmd| cmd.vendor == vendor || cmd.vendor == Vendor::Generic)
            .collect()
    }

    /// Проверка каталога при старте: алиас, повторяющийся в двух
    /// определениях или совпадающий с чужим основным именем, делает
    /// разрешение неоднозначным — это ошибка конфигурации, а не запроса.
    pub fn validate(&self) -> Result<(), SnmpApiError> {
        let mut seen: HashMap<&str, &str> = HashMap::new();

        for cmd in &self.commands {
            for alias in &cmd.aliases {
                if let Some(&owner) = seen.get(alias.as_str()) {
                    return Err(SnmpApiError::Configuration(format!(
                        "алиас '{}' задан и у '{}', и у '{}'",
                        alias, owner, cmd.name
                    )));
                }
                if let Some(&i) = self.by_name.get(alias.as_str()) {
                    if self.commands[i].name != cmd.name {
                        return Err(SnmpApiError::Configuration(format!(
                            "алиас '{}' команды '{}' совпадает с именем другой команды",
                            alias, cmd.name
                        )));
                    }
                }
                seen.insert(alias, &cmd.name);
            }
        }

        Ok(())
    }
}

fn cmd(
    name: &str,
    description: &str,
    oid: &str,
    operation: Operation,
    vendor: Vendor,
    aliases: &[&str],
) -> CommandDefinition {
    CommandDefinition {
        name: name.to_string(),
        description: description.to_string(),
        oid: oid.to_string(),
        operation,
        vendor,
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
    }
}

/// Статический набор команд: system-группа, интерфейсы, IP, вендорные
/// ветки Cisco/Juniper, производительность, маршрутизация, ARP.
fn definitions() -> Vec<CommandDefinition> {
    use Operation::*;
    use Vendor::*;

    vec![
        // Системная информация
        cmd(
            "systemInfo",
            "Get system description and details",
            "1.3.6.1.2.1.1.1.0",
            Get,
            Generic,
            &["sysDescr", "deviceInfo"],
        ),
        cmd(
            "systemName",
            "Get system hostname/name",
            "1.3.6.1.2.1.1.5.0",
            Get,
            Generic,
            &["hostname", "sysName"],
        ),
        cmd(
            "systemUptime",
            "Get system uptime in ticks (1/100 seconds)",
            "1.3.6.1.2.1.1.3.0",
            Get,
            Generic,
            &["uptime", "sysUpTime"],
        ),
        cmd(
            "systemContact",
            "Get system contact information",
            "1.3.6.1.2.1.1.4.0",
            Get,
            Generic,
            &[],
        ),
        cmd(
            "systemLocation",
            "Get system location",
            "1.3.6.1.2.1.1.6.0",
            Get,
            Generic,
            &["location"],
        ),
        // Интерфейсы (IF-MIB)
        cmd(
            "interfaceCount",
            "Get number of network interfaces",
            "1.3.6.1.2.1.2.1.0",
            Get,
            Generic,
            &[],
        ),
        cmd(
            "interfaces",
            "Get all network interfaces (flat list)",
            "1.3.6.1.2.1.2.2",
            Walk,
            Generic,
            &["ifList", "networkInterfaces"],
        ),
        cmd(
            "interfacesTable",
            "Get all network interfaces (structured table)",
            "1.3.6.1.2.1.2.2.1",
            Walk,
            Generic,
            &[],
        ),
        cmd(
            "interfaceStatus",
            "Get interface status (admin & operational)",
            "1.3.6.1.2.1.2.2.1.7",
            Walk,
            Generic,
            &["ifStatus", "portStatus"],
        ),
        cmd(
            "interfaceSpeed",
            "Get interface speeds",
            "1.3.6.1.2.1.2.2.1.5",
            Walk,
            Generic,
            &[],
        ),
        cmd(
            "interfaceTraffic",
            "Get interface traffic statistics (in/out octets)",
            "1.3.6.1.2.1.2.2.1.10",
            Walk,
            Generic,
            &[],
        ),
        // IP адреса
        cmd(
            "ipAddresses",
            "Get all IP addresses and netmasks",
            "1.3.6.1.2.1.4.20.1",
            Walk,
            Generic,
            &["ipAddrTable", "ips"],
        ),
        // Cisco
        cmd(
            "ciscoInterfaceNames",
            "Get Cisco interface descriptions/names",
            "1.3.6.1.4.1.9.2.2.1.1.28",
            Walk,
            Cisco,
            &["switchInterfaces", "ciscoInterfaces"],
        ),
        cmd(
            "ciscoVLAN",
            "Get Cisco VLAN information",
            "1.3.6.1.4.1.9.9.46.1.3.1.1.2",
            Walk,
            Cisco,
            &["vlan", "vlans"],
        ),
        cmd(
            "ciscoPortVLAN",
            "Get Cisco port VLAN assignments",
            "1.3.6.1.4.1.9.9.46.1.3.1.1.4",
            Walk,
            Cisco,
            &[],
        ),
        cmd(
            "ciscoCPU",
            "Get Cisco CPU utilization",
            "1.3.6.1.4.1.9.9.109.1.1.1.1.3.1",
            Get,
            Cisco,
            &["cpuUtilization"],
        ),
        cmd(
            "ciscoMemory",
            "Get Cisco memory statistics",
            "1.3.6.1.4.1.9.9.48.1.1.1.5.1",
            Get,
            Cisco,
            &[],
        ),
        cmd(
            "ciscoPortSpeed",
            "Get Cisco port speeds",
            "1.3.6.1.4.1.9.9.87.1.4.1.1.32",
            Walk,
            Cisco,
            &[],
        ),
        cmd(
            "ciscoPortDuplex",
            "Get Cisco port duplex mode",
            "1.3.6.1.4.1.9.9.87.1.4.1.1.40",
            Walk,
            Cisco,
            &[],
        ),
        cmd(
            "ciscoModuleStatus",
            "Get Cisco module/card status",
            "1.3.6.1.4.1.9.9.46.1.6.1.1.5",
            Walk,
            Cisco,
            &[],
        ),
        // Juniper
        cmd(
            "juniperInterfaces",
            "Get Juniper interface details",
            "1.3.6.1.4.1.2636.3.4.2.3.1",
            Walk,
            Juniper,
            &["juniperPorts"],
        ),
        cmd(
            "juniperInterfaceStatistics",
            "Get Juniper interface statistics",
            "1.3.6.1.4.1.2636.3.4.2.4.1",
            Walk,
            Juniper,
            &[],
        ),
        cmd(
            "juniperCPU",
            "Get Juniper CPU utilization",
            "1.3.6.1.4.1.2636.3.1.13.1.5",
            Get,
            Juniper,
            &[],
        ),
        cmd(
            "juniperMemory",
            "Get Juniper memory usage",
            "1.3.6.1.4.1.2636.3.1.13.1.11",
            Get,
            Juniper,
            &[],
        ),
        cmd(
            "juniperChassis",
            "Get Juniper chassis information",
            "1.3.6.1.4.1.2636.3.1.2",
            Walk,
            Juniper,
            &[],
        ),
        cmd(
            "juniperAlarms",
            "Get Juniper active alarms",
            "1.3.6.1.4.1.2636.3.4.2.2.1",
            Walk,
            Juniper,
            &[],
        ),
        // Производительность (HOST-RESOURCES-MIB)
        cmd(
            "cpuUsage",
            "Get device CPU usage (vendor-agnostic)",
            "1.3.6.1.2.1.25.3.3.1.2",
            Walk,
            Generic,
            &[],
        ),
        cmd(
            "memoryUsage",
            "Get device memory usage (vendor-agnostic)",
            "1.3.6.1.2.1.25.2.3.1",
            Walk,
            Generic,
            &[],
        ),
        cmd(
            "diskUsage",
            "Get disk/storage usage",
            "1.3.6.1.2.1.25.3.2.1",
            Walk,
            Generic,
            &[],
        ),
        // Маршрутизация и ARP
        cmd(
            "routingTable",
            "Get IP routing table",
            "1.3.6.1.2.1.4.21.1",
            Walk,
            Generic,
            &["routes"],
        ),
        cmd(
            "arpTable",
            "Get ARP table (IP to MAC mappings)",
            "1.3.6.1.2.1.4.22.1.3",
            Walk,
            Generic,
            &["arp"],
        ),
    ]
}
