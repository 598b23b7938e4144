use anyhow::{Context, Result};
use async_trait::async_trait;
use snmp2::{AsyncSession, Oid};
use tokio::time::timeout;
use tracing::{debug, warn};

use super::{oid::parse_oid, value, ConnectionParams, SnmpExecutor, Varbind};

/// Исполнитель поверх snmp2 (SNMPv2c). Сессия создаётся на одну операцию
/// и закрывается при выходе из метода на любом исходе (drop).
// TODO: поддержка SNMPv3 (authPriv) вторым вариантом исполнителя
pub struct Snmp2Executor;

impl Snmp2Executor {
    async fn open_session(params: &ConnectionParams) -> Result<AsyncSession> {
        AsyncSession::new_v2c(&params.target(), params.community.as_bytes(), 0)
            .await
            .context("Не удалось создать SNMP сессию")
    }
}

#[async_trait]
impl SnmpExecutor for Snmp2Executor {
    async fn get(&self, params: &ConnectionParams, oids: &[String]) -> Result<Vec<Varbind>> {
        let mut session = Self::open_session(params).await?;
        let mut results = Vec::with_capacity(oids.len());

        for oid_str in oids {
            let oid = parse_oid(oid_str)?;
            let mut attempt = 0u32;

            // Таймаут на каждый round-trip, повторы ограничены retries
            let resp = loop {
                match timeout(params.timeout, session.get(&oid)).await {
                    Ok(Ok(resp)) => break resp,
                    Ok(Err(e)) if attempt < params.retries => {
                        warn!(oid = %oid_str, attempt, error = %e, "SNMP GET не удался, повтор");
                        attempt += 1;
                    }
                    Ok(Err(e)) => return Err(e).context("SNMP GET запрос не удался"),
                    Err(_) if attempt < params.retries => {
                        warn!(oid = %oid_str, attempt, "Таймаут SNMP GET, повтор");
                        attempt += 1;
                    }
                    Err(_) => anyhow::bail!("Таймаут SNMP GET для {}", oid_str),
                }
            };

            let mut got_any = false;
            for (vb_oid, vb_value) in resp.varbinds {
                let (value_type, json) = value::to_json(&vb_value);
                results.push(Varbind {
                    oid: vb_oid.to_string(),
                    value_type,
                    value: json,
                });
                got_any = true;
            }

            if !got_any {
                anyhow::bail!("SNMP ответ пустой для {}", oid_str);
            }
        }

        Ok(results)
    }

    async fn walk(
        &self,
        params: &ConnectionParams,
        root_oid: &str,
        max_per_step: u32,
    ) -> Result<Vec<Varbind>> {
        self.bulk_walk(params, root_oid, max_per_step, 0).await
    }

    async fn bulk_walk(
        &self,
        params: &ConnectionParams,
        root_oid: &str,
        max_repetitions: u32,
        non_repeaters: u32,
    ) -> Result<Vec<Varbind>> {
        let mut session = Self::open_session(params).await?;

        let root: Oid<'static> = parse_oid(root_oid)?;
        let mut current_oid = root.to_owned();
        let mut results: Vec<Varbind> = Vec::new();

        loop {
            let mut attempt = 0u32;
            let resp = loop {
                match timeout(
                    params.timeout,
                    session.getbulk(&[&current_oid], non_repeaters, max_repetitions),
                )
                .await
                {
                    Ok(Ok(resp)) => break resp,
                    Ok(Err(e)) if attempt < params.retries => {
                        warn!(oid = %root_oid, attempt, error = %e, "SNMP GETBULK не удался, повтор");
                        attempt += 1;
                    }
                    Ok(Err(e)) => return Err(e).context("SNMP GETBULK запрос не удался"),
                    Err(_) if attempt < params.retries => {
                        warn!(oid = %root_oid, attempt, "Таймаут SNMP GETBULK, повтор");
                        attempt += 1;
                    }
                    Err(_) => anyhow::bail!("Таймаут SNMP обхода для {}", root_oid),
                }
            };

            let mut found_any = false;
            for (vb_oid, vb_value) in resp.varbinds {
                // Вышли за пределы поддерева — обход закончен
                if !vb_oid.starts_with(&root) {
                    debug!(oid = %root_oid, count = results.len(), "SNMP обход завершён");
                    return Ok(results);
                }

                current_oid = vb_oid.to_owned();
                found_any = true;

                // Протокольные исключения не фатальны для всего обхода
                if value::is_exception(&vb_value) {
                    warn!(oid = %vb_oid, "Пропущен varbind с исключением в обходе");
                    continue;
                }

                let (value_type, json) = value::to_json(&vb_value);
                results.push(Varbind {
                    oid: vb_oid.to_string(),
                    value_type,
                    value: json,
                });
            }

            if !found_any {
                break;
            }
        }

        Ok(results)
    }

    fn supports_bulk(&self) -> bool {
        true
    }
}
