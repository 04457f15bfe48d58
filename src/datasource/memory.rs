// src/datasource/memory.rs
//! 测试用的内存后端：只实现 `eq.` 过滤和 `order=field.asc|desc`，
//! 没有 order 时按插入顺序返回。写操作都回传受影响的行。
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::{Map, Value};

use super::DataBackend;
use crate::error::{ServiceError, ServiceResult};

// 这两张表的主键是自增整数，其余用 uuid 字符串
const INTEGER_ID_TABLES: &[&str] = &["habits", "mood"];

#[derive(Default)]
pub struct MemoryBackend {
    tables: Mutex<HashMap<String, Vec<Map<String, Value>>>>,
    next_id: AtomicU64,
    failures: Mutex<Vec<(String, Method)>>,
    calls: Mutex<Vec<(String, Method, String)>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// 直接塞一行，返回分配到的 id
    pub fn seed(&self, table: &str, row: Value) -> String {
        render(&self.store(table, row)["id"])
    }

    fn store(&self, table: &str, row: Value) -> Map<String, Value> {
        let mut row = match row {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        self.assign_id(table, &mut row);
        self.tables
            .lock()
            .unwrap()
            .entry(table.to_string())
            .or_default()
            .push(row.clone());
        row
    }

    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.tables
            .lock()
            .unwrap()
            .get(table)
            .map(|rows| rows.iter().cloned().map(Value::Object).collect())
            .unwrap_or_default()
    }

    pub fn count(&self, table: &str) -> usize {
        self.tables.lock().unwrap().get(table).map_or(0, Vec::len)
    }

    /// 下一次对 (table, method) 的调用返回 500
    pub fn fail_next(&self, table: &str, method: Method) {
        self.failures.lock().unwrap().push((table.to_string(), method));
    }

    pub fn calls(&self) -> Vec<(String, Method, String)> {
        self.calls.lock().unwrap().clone()
    }

    fn assign_id(&self, table: &str, row: &mut Map<String, Value>) {
        let present = row
            .get("id")
            .map(|v| !v.is_null() && v != &Value::String(String::new()) && v != &Value::from(0))
            .unwrap_or(false);
        if !present {
            let id = if INTEGER_ID_TABLES.contains(&table) {
                Value::from(self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
            } else {
                Value::String(uuid::Uuid::new_v4().to_string())
            };
            row.insert("id".to_string(), id);
        }
    }

    fn take_failure(&self, table: &str, method: &Method) -> bool {
        let mut failures = self.failures.lock().unwrap();
        match failures.iter().position(|(t, m)| t == table && m == method) {
            Some(index) => {
                failures.remove(index);
                true
            }
            None => false,
        }
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn parse_filters(filter: &str) -> Vec<(String, String)> {
    filter
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| {
            let (field, condition) = pair.split_once('=')?;
            let value = condition.strip_prefix("eq.")?;
            let value = urlencoding::decode(value).ok()?.into_owned();
            Some((field.to_string(), value))
        })
        .collect()
}

// `order=created_at.asc`，只取第一个排序字段
fn parse_order(filter: &str) -> Option<(String, bool)> {
    let spec = filter
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("order="))?;
    let (field, direction) = spec.split_once('.').unwrap_or((spec, "asc"));
    Some((field.to_string(), direction != "desc"))
}

fn matches(row: &Map<String, Value>, filters: &[(String, String)]) -> bool {
    filters
        .iter()
        .all(|(field, value)| row.get(field).map(render).as_deref() == Some(value.as_str()))
}

#[async_trait]
impl DataBackend for MemoryBackend {
    async fn query(
        &self,
        table: &str,
        method: Method,
        filter: &str,
        body: Option<Value>,
    ) -> ServiceResult<Vec<u8>> {
        self.calls
            .lock()
            .unwrap()
            .push((table.to_string(), method.clone(), filter.to_string()));

        if self.take_failure(table, &method) {
            return Err(ServiceError::Backend {
                status: 500,
                body: format!("injected failure on {} {}", method, table),
            });
        }

        let filters = parse_filters(filter);

        if method == Method::GET {
            let tables = self.tables.lock().unwrap();
            let mut rows: Vec<Map<String, Value>> = tables
                .get(table)
                .map(|rows| rows.iter().filter(|row| matches(row, &filters)).cloned().collect())
                .unwrap_or_default();
            if let Some((field, ascending)) = parse_order(filter) {
                rows.sort_by_key(|row| row.get(&field).map(render));
                if !ascending {
                    rows.reverse();
                }
            }
            let rows: Vec<Value> = rows.into_iter().map(Value::Object).collect();
            return Ok(serde_json::to_vec(&rows)?);
        }

        if method == Method::POST {
            let inserted = match body {
                Some(Value::Array(items)) => items,
                Some(item) => vec![item],
                None => Vec::new(),
            };
            let stored: Vec<Value> = inserted
                .into_iter()
                .map(|item| Value::Object(self.store(table, item)))
                .collect();
            return Ok(serde_json::to_vec(&stored)?);
        }

        if method == Method::PATCH || method == Method::PUT {
            let patch = match body {
                Some(Value::Object(map)) => map,
                _ => Map::new(),
            };
            let mut tables = self.tables.lock().unwrap();
            let mut updated = Vec::new();
            if let Some(rows) = tables.get_mut(table) {
                for row in rows.iter_mut().filter(|row| matches(row, &filters)) {
                    for (key, value) in &patch {
                        row.insert(key.clone(), value.clone());
                    }
                    updated.push(Value::Object(row.clone()));
                }
            }
            return Ok(serde_json::to_vec(&updated)?);
        }

        if method == Method::DELETE {
            let mut tables = self.tables.lock().unwrap();
            let mut removed = Vec::new();
            if let Some(rows) = tables.get_mut(table) {
                let (gone, kept): (Vec<_>, Vec<_>) =
                    rows.drain(..).partition(|row| matches(row, &filters));
                *rows = kept;
                removed.extend(gone.into_iter().map(Value::Object));
            }
            return Ok(serde_json::to_vec(&removed)?);
        }

        Err(ServiceError::Backend {
            status: 405,
            body: format!("unsupported method {}", method),
        })
    }
}
