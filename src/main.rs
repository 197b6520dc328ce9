// ==========================================
// 弹药配装优化系统 - 命令行入口
// ==========================================
// 用法:
//   ammo-allocator [input_path] [output_path]
//
// 未给出的路径依次回落到 环境变量 / 配置文件 / 默认值
// (inputPS3.txt / outputPS3.txt)
// ==========================================

use ammo_allocator::{logging, AllocationApi};
use anyhow::Context;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // 记录不足等终止性错误：不写出任何报告
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    tracing::info!("{} v{}", ammo_allocator::APP_NAME, ammo_allocator::VERSION);

    let config = AllocationApi::load_config(std::env::args().skip(1)).context("加载配置失败")?;

    let api = AllocationApi::new(&config);
    let result = api
        .run_file(&config.input_path, &config.output_path)
        .with_context(|| format!("处理输入文件失败: {}", config.input_path.display()))?;

    tracing::info!(
        total_value = result.total_value,
        selected_count = result.selections.len(),
        output = %config.output_path.display(),
        "计算完成"
    );
    Ok(())
}
