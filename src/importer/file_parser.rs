// ==========================================
// 弹药配装优化系统 - 输入解析器实现
// ==========================================
// 支持: 文本格式 (.txt) / JSON (.json)
// ==========================================
// 文本格式:
//   Weapons: <N>
//   MaxWeight: <W>
//   <名称> / <重量> / <伤害>    （N 行）
// ==========================================

use crate::domain::item::{AllocationInput, Item};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::input_parser_trait::InputParser;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

// 头部占用的行数（记录行号从 HEADER_LINES + 1 开始）
const HEADER_LINES: usize = 2;

// ==========================================
// 文本格式解析器
// ==========================================
pub struct TextInputParser;

impl InputParser for TextInputParser {
    fn parse_reader(&self, reader: Box<dyn Read + '_>) -> ImportResult<AllocationInput> {
        let mut reader = BufReader::new(reader);

        // 1. 头部：声明数量 + 最大重量
        let count_raw = read_header_value(&mut reader, 1, "Weapons")?;
        let declared_count: usize =
            count_raw
                .parse()
                .map_err(|_| ImportError::TypeConversion {
                    row: 1,
                    field: "Weapons".to_string(),
                    value: count_raw.clone(),
                })?;

        let capacity_raw = read_header_value(&mut reader, 2, "MaxWeight")?;
        let capacity = parse_number(&capacity_raw, 2, "MaxWeight")?;

        // 2. 记录行：'/' 分隔，只读取声明数量的记录，多余行忽略
        let mut records = ReaderBuilder::new()
            .delimiter(b'/')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_reader(reader);

        // 声明数量来自输入头部，不可信，不按其预分配
        let mut items = Vec::new();
        for (idx, result) in records.records().take(declared_count).enumerate() {
            let record = result?;
            // csv 的 line() 从头部之后的第一行起计 1
            let row = record
                .position()
                .map(|p| p.line() as usize + HEADER_LINES)
                .unwrap_or(idx + HEADER_LINES + 1);

            if record.len() != 3 {
                return Err(ImportError::MalformedRecord {
                    row,
                    fields: record.len(),
                });
            }

            let weight = parse_number(&record[1], row, "weight")?;
            let damage = parse_number(&record[2], row, "damage")?;
            items.push(Item::new(&record[0], weight, damage));
        }

        if items.len() < declared_count {
            warn!(declared = declared_count, found = items.len(), "弹药记录不足");
            return Err(ImportError::InputShortage {
                declared: declared_count,
                found: items.len(),
            });
        }

        debug!(declared = declared_count, capacity, "文本输入解析完成");

        Ok(AllocationInput {
            declared_count,
            capacity,
            items,
        })
    }
}

/// 读取一行头部，返回第一个 ':' 之后的值
fn read_header_value<R: BufRead>(
    reader: &mut R,
    line_no: usize,
    field: &str,
) -> ImportResult<String> {
    let mut line = String::new();
    let read = reader.read_line(&mut line)?;

    let missing = || ImportError::HeaderMissing {
        line: line_no,
        field: field.to_string(),
    };

    if read == 0 {
        return Err(missing());
    }

    line.trim()
        .split(':')
        .nth(1)
        .map(|v| v.trim().to_string())
        .ok_or_else(missing)
}

fn parse_number(raw: &str, row: usize, field: &str) -> ImportResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ImportError::TypeConversion {
            row,
            field: field.to_string(),
            value: raw.to_string(),
        })
}

// ==========================================
// JSON 格式解析器
// ==========================================
// {"weapons": 2, "max_weight": 10, "ammunition": [{"name": "A", "weight": 5, "damage": 50}]}
#[derive(Debug, Deserialize)]
struct JsonLoadout {
    weapons: usize,
    max_weight: f64,
    #[serde(default)]
    ammunition: Vec<JsonAmmunition>,
}

#[derive(Debug, Deserialize)]
struct JsonAmmunition {
    name: String,
    weight: f64,
    damage: f64,
}

pub struct JsonInputParser;

impl InputParser for JsonInputParser {
    fn parse_reader(&self, reader: Box<dyn Read + '_>) -> ImportResult<AllocationInput> {
        let loadout: JsonLoadout = serde_json::from_reader(reader)?;

        if loadout.ammunition.len() < loadout.weapons {
            warn!(
                declared = loadout.weapons,
                found = loadout.ammunition.len(),
                "弹药记录不足"
            );
            return Err(ImportError::InputShortage {
                declared: loadout.weapons,
                found: loadout.ammunition.len(),
            });
        }

        let items = loadout
            .ammunition
            .into_iter()
            .take(loadout.weapons)
            .map(|a| Item::new(a.name, a.weight, a.damage))
            .collect();

        Ok(AllocationInput {
            declared_count: loadout.weapons,
            capacity: loadout.max_weight,
            items,
        })
    }
}

// ==========================================
// 通用输入解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalInputParser;

impl UniversalInputParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<AllocationInput> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "txt" | "" => TextInputParser.parse_file(path),
            "json" => JsonInputParser.parse_file(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}
