//! Ideascube - 部署配置解析
//!
//! 启动顺序：运行配置 -> 日志 -> overlay 注册表 -> 解析并发布 Settings

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use ideascube::application::{export_filename_now, OverlaySourcePort};
use ideascube::config::{load_config_from_path, print_config, AppConfig};
use ideascube::domain::settings::publish;
use ideascube::Bootstrap;

mod cli;

use cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 加载配置（优先级：命令行 > 环境变量 > 配置文件 > 默认值）
    let mut config = load_config_from_path(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
    if let Some(dir) = cli.conf_dir.clone() {
        config.resolver.conf_dir = Some(dir);
    }

    init_logging(&config);
    print_config(&config);

    let bootstrap = Bootstrap::new(&config.resolver)?;
    let command = cli.command.clone().unwrap_or(Command::Check);

    if let Command::Confs = command {
        return list_confs(&bootstrap);
    }

    // 启动诊断写到标准输出
    let settings = {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        bootstrap
            .resolve(&config.resolver, cli.id.as_deref(), &mut out)
            .context("Failed to resolve settings")?
    };
    let settings = publish(Arc::new(settings))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match command {
        Command::Check | Command::Confs => {
            tracing::info!(
                module = %settings.settings_module(),
                languages = settings.languages().len(),
                "Settings OK"
            );
        }
        Command::Show { json } => {
            if json {
                serde_json::to_writer_pretty(&mut out, &settings.to_json())?;
                writeln!(out)?;
            } else {
                for (key, value) in settings.iter() {
                    writeln!(out, "{} = {}", key, value)?;
                }
            }
        }
        Command::ExportName { prefix } => {
            writeln!(out, "{}", export_filename_now(&prefix, &settings))?;
        }
        Command::Get { key } => {
            let value = settings
                .get(&key)
                .with_context(|| format!("Unknown setting: {}", key))?;
            writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
        }
    }

    Ok(())
}

fn init_logging(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log.filter()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn list_confs(bootstrap: &Bootstrap) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for name in bootstrap.registry.names() {
        let origin = bootstrap
            .registry
            .origin(&name)
            .map(|o| o.to_string())
            .unwrap_or_default();
        let doc = match bootstrap.registry.load(&name) {
            Ok(overlay) => overlay.doc().unwrap_or("").to_string(),
            Err(e) => format!("<{}>", e),
        };
        writeln!(out, "{:<24} {:<10} {}", name, origin, doc)?;
    }
    Ok(())
}
