// ==========================================
// 弹药配装优化系统 - 分配 API
// ==========================================
// 职责: 串联 导入 → 校验 → 分配 → 报告
// 红线: 校验失败或记录不足时不写出任何报告
// ==========================================

use std::io::Read;
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::api::error::ApiResult;
use crate::config::AllocatorConfig;
use crate::domain::item::{AllocationInput, AllocationResult};
use crate::engine::Allocator;
use crate::importer::{DqValidator, InputParser, TextInputParser, UniversalInputParser};
use crate::output::ReportWriter;

// ==========================================
// AllocationApi - 分配 API
// ==========================================
pub struct AllocationApi {
    allocator: Allocator,
    validator: DqValidator,
    writer: ReportWriter,
}

impl AllocationApi {
    /// 按配置构造
    pub fn new(config: &AllocatorConfig) -> Self {
        Self {
            allocator: Allocator::with_policy(config.ratio_mode, config.zero_take_policy),
            validator: DqValidator::new(),
            writer: ReportWriter::new(config.decimal_places, config.output_format),
        }
    }

    /// 解析运行配置：配置文件 → 键值覆写 → 命令行位置参数
    ///
    /// # 参数
    /// - `config_path`: 显式配置文件（None 时使用默认位置）
    /// - `lookup`: 覆写来源（通常为环境变量）
    /// - `args`: 命令行位置参数 [输入路径] [输出路径]
    pub fn resolve_config<F, I>(
        config_path: Option<&Path>,
        lookup: F,
        args: I,
    ) -> ApiResult<AllocatorConfig>
    where
        F: Fn(&str) -> Option<String>,
        I: IntoIterator<Item = String>,
    {
        let mut config = AllocatorConfig::load_with(config_path, lookup).map_err(|e| {
            warn!(error = %e, "配置加载失败");
            e
        })?;
        config.apply_cli_args(args);
        Ok(config)
    }

    /// 按环境变量解析运行配置（见 AllocatorConfig::load）
    pub fn load_config<I>(args: I) -> ApiResult<AllocatorConfig>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = AllocatorConfig::load()?;
        config.apply_cli_args(args);
        Ok(config)
    }

    /// 校验并分配（内存输入）
    pub fn allocate(&self, input: &AllocationInput) -> ApiResult<AllocationResult> {
        if let Err(e) = self.validator.validate(input) {
            warn!(error = %e, "输入校验失败");
            return Err(e.into());
        }

        Ok(self.allocator.allocate(input.capacity, &input.items))
    }

    /// 从文本读取源解析并分配，返回渲染后的报告
    pub fn run_reader<'a, R: Read + 'a>(&self, reader: R) -> ApiResult<String> {
        let input = TextInputParser.parse_reader(Box::new(reader))?;
        let result = self.allocate(&input)?;
        Ok(self.writer.render(&result)?)
    }

    /// 完整流程：读取输入文件 → 分配 → 写出报告文件
    ///
    /// # 返回
    /// - Ok(AllocationResult): 报告已写出
    /// - Err: 任一阶段失败（报告文件不会被创建或改写）
    #[instrument(skip(self), fields(input = %input_path.display(), output = %output_path.display()))]
    pub fn run_file(&self, input_path: &Path, output_path: &Path) -> ApiResult<AllocationResult> {
        let input = UniversalInputParser.parse(input_path)?;
        info!(
            declared = input.declared_count,
            capacity = input.capacity,
            "输入读取完成"
        );

        let result = self.allocate(&input)?;
        self.writer.write_file(output_path, &result)?;
        Ok(result)
    }
}

impl Default for AllocationApi {
    fn default() -> Self {
        Self::new(&AllocatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ApiError;
    use crate::config::{config_keys, ConfigError};
    use crate::domain::item::Item;
    use crate::importer::ImportError;

    #[test]
    fn test_allocate_rejects_invalid_item() {
        let input = AllocationInput {
            declared_count: 1,
            capacity: 10.0,
            items: vec![Item::new("Bad", 0.0, 10.0)],
        };

        let err = AllocationApi::default().allocate(&input).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Import(ImportError::InvalidItem { .. })
        ));
    }

    #[test]
    fn test_run_reader_renders_report() {
        let report = AllocationApi::default()
            .run_reader("Weapons: 2\nMaxWeight: 7\nA / 10 / 100\nB / 5 / 25\n".as_bytes())
            .unwrap();

        assert_eq!(
            report,
            "Total Damage: 70\nAmmunition Packs Selection Ratio:\nA > 0.7\n"
        );
    }

    #[test]
    fn test_run_reader_huge_declared_count_halts() {
        let err = AllocationApi::default()
            .run_reader("Weapons: 18446744073709551615\nMaxWeight: 7\nA / 10 / 100\n".as_bytes())
            .unwrap_err();
        assert!(err.is_input_shortage());
    }

    #[test]
    fn test_resolve_config_bad_value_is_config_error() {
        let err = AllocationApi::resolve_config(
            None,
            |key| (key == config_keys::RATIO_MODE).then(|| "rounded".to_string()),
            Vec::<String>::new(),
        )
        .unwrap_err();

        assert!(matches!(err, ApiError::Config(ConfigError::ValueError { .. })));
    }

    #[test]
    fn test_resolve_config_missing_file_is_config_error() {
        let err = AllocationApi::resolve_config(
            Some(Path::new("no_such_dir/config.json")),
            |_| None,
            Vec::<String>::new(),
        )
        .unwrap_err();

        assert!(matches!(err, ApiError::Config(ConfigError::FileReadError { .. })));
    }

    #[test]
    fn test_resolve_config_cli_args_win() {
        let config = AllocationApi::resolve_config(
            None,
            |key| (key == config_keys::INPUT_PATH).then(|| "env.txt".to_string()),
            vec!["cli.txt".to_string()],
        )
        .unwrap();

        assert_eq!(config.input_path, std::path::PathBuf::from("cli.txt"));
    }

    #[test]
    fn test_run_reader_shortage() {
        let err = AllocationApi::default()
            .run_reader("Weapons: 2\nMaxWeight: 7\nA / 10 / 100\n".as_bytes())
            .unwrap_err();
        assert!(err.is_input_shortage());
    }
}
