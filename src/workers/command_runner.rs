use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::timeout_duration;
use crate::enums::commands::Commands;
use crate::enums::output_format::OutputFormat;
use crate::errors::{GapAnalyzerError, GapResult};
use crate::logger::animated_logger::AnimatedLogger;
use crate::logger::report_logger::ReportLogger;
use crate::services::analysis_runner::AnalysisRunner;
use crate::services::file_scan_source::FileScanSource;
use crate::services::gap_analyzer::GapAnalyzer;
use crate::services::github_scanner::GitHubScanner;
use crate::services::report_renderer::ReportRenderer;
use crate::structs::config::config::Config;
use crate::structs::config::repository_config::RepositoryConfig;
use crate::structs::deep_analysis_result::DeepAnalysisResult;
use crate::structs::feature_filter::FeatureFilter;
use crate::ui::analysis_server::AnalysisServer;

/// Where and how an `analyze` run writes its reports.
struct ReportTarget {
    format: OutputFormat,
    filter: FeatureFilter,
    output: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub const fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> GapResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Analyze {
                repo,
                input,
                format,
                output,
                category,
                priority,
            } => {
                self.analyze_command(repo, input, format, output, FeatureFilter::new(category, priority))
                    .await
            }
            Commands::Serve { port } => self.serve_command(port).await,
            Commands::Validate => self.validate_command(),
            Commands::Catalog => self.catalog_command(),
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn load_config(&self) -> GapResult<Config> {
        let config = ConfigManager::load(self.config_path.as_deref())?;
        ConfigManager::validate_config(&config).map_err(|errors| {
            GapAnalyzerError::config_error(
                &errors.join("; "),
                None,
                Some("Run 'gap-analyzer validate' for details"),
            )
        })?;
        Ok(config)
    }

    fn init_command(&self) -> GapResult<()> {
        log::info!("🚀 Initializing gap-analyzer configuration...");
        let path = self
            .config_path
            .clone()
            .unwrap_or_else(ConfigManager::default_config_path);

        ConfigManager::create_sample_config(&path)?;
        log::info!("✅ Configuration file created successfully!");
        Ok(())
    }

    async fn analyze_command(
        &self,
        repo: Option<String>,
        input: Option<PathBuf>,
        format: Option<OutputFormat>,
        output: Option<PathBuf>,
        filter: FeatureFilter,
    ) -> GapResult<()> {
        log::info!("🔍 Starting feature-gap analysis...");
        let config = self.load_config()?;

        let analyzer = Arc::new(GapAnalyzer::from_config(&config.analyzer)?);
        let runner = AnalysisRunner::new(analyzer, timeout_duration(config.scanner.timeout_secs));
        let target = ReportTarget {
            format: format.unwrap_or(config.output.format),
            filter,
            output,
            output_dir: config.output.output_dir.as_ref().map(PathBuf::from),
        };

        if let Some(input) = input {
            let source = FileScanSource::new(&input);
            let result = runner.run(&source).await?;
            let title = input
                .file_stem()
                .map_or_else(|| "stdin".to_string(), |stem| stem.to_string_lossy().to_string());
            return Self::emit_report(&title, &result, &target);
        }

        let repositories = Self::select_repositories(&config, repo.as_deref())?;
        if repositories.len() > 1 {
            if let Some(output) = &target.output {
                if !output.is_dir() {
                    return Err(GapAnalyzerError::config_error(
                        "--output must be an existing directory when analyzing several repositories",
                        Some("output"),
                        Some("Pass --repo to analyze a single repository"),
                    ));
                }
            }
        }

        let mut analyzed = 0;
        let mut last_error = None;
        for repository in &repositories {
            match self.analyze_repository(&runner, &config, repository).await {
                Ok(result) => {
                    Self::emit_report(&repository.name, &result, &target)?;
                    analyzed += 1;
                }
                Err(e) if repositories.len() > 1 && e.is_recoverable() => {
                    log::error!("❌ Failed to analyze repository '{}': {}", repository.name, e);
                    log::error!("   Continuing with next repository...");
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        match last_error {
            Some(e) if analyzed == 0 => Err(e),
            _ => {
                log::info!("✅ Analysis complete for {analyzed} of {} repositories", repositories.len());
                Ok(())
            }
        }
    }

    fn select_repositories(config: &Config, name: Option<&str>) -> GapResult<Vec<RepositoryConfig>> {
        if let Some(name) = name {
            return config
                .repositories
                .iter()
                .find(|repo| repo.name == name)
                .cloned()
                .map(|repo| vec![repo])
                .ok_or_else(|| GapAnalyzerError::RepositoryNotFound {
                    name: name.to_string(),
                    available: config.repository_names(),
                });
        }

        let enabled: Vec<RepositoryConfig> = config.enabled_repositories().cloned().collect();
        if enabled.is_empty() {
            return Err(GapAnalyzerError::config_error(
                "No enabled repositories configured",
                Some("repositories"),
                Some("Add a [[repositories]] entry or pass --input <scan.json>"),
            ));
        }
        Ok(enabled)
    }

    async fn analyze_repository(
        &self,
        runner: &AnalysisRunner,
        config: &Config,
        repository: &RepositoryConfig,
    ) -> GapResult<DeepAnalysisResult> {
        log::info!("🎯 Analyzing repository: {}", repository.name);
        let scanner = GitHubScanner::new(repository, &config.scanner)?;

        let mut spinner = AnimatedLogger::new(format!("Scanning {}", repository.full_name()));
        spinner.start();

        match runner.run(&scanner).await {
            Ok(result) => {
                spinner
                    .stop(&format!("{}: {} missing features", repository.name, result.total_missing_count))
                    .await;
                Ok(result)
            }
            Err(e) => {
                spinner.error(&format!("{}: {}", repository.name, e)).await;
                Err(e)
            }
        }
    }

    fn emit_report(title: &str, result: &DeepAnalysisResult, target: &ReportTarget) -> GapResult<()> {
        let file_name = ReportRenderer::file_name(title, target.format);
        let path = match (&target.output, &target.output_dir) {
            (Some(output), _) if output.is_dir() => Some(output.join(&file_name)),
            (Some(output), _) => Some(output.clone()),
            (None, Some(dir)) => Some(dir.join(&file_name)),
            (None, None) => None,
        };

        match path {
            Some(path) => {
                let rendered = ReportRenderer::render(title, result, &target.filter, target.format)?;
                Self::write_report(&path, &rendered)?;
                log::info!("💾 Report for {title} written to {}", path.display());
            }
            None if target.format == OutputFormat::Text => {
                ReportLogger::print_report(title, result, &target.filter);
            }
            None => {
                println!("{}", ReportRenderer::render(title, result, &target.filter, target.format)?);
            }
        }
        Ok(())
    }

    fn write_report(path: &Path, rendered: &str) -> GapResult<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| GapAnalyzerError::file_error(&parent.display().to_string(), "create", &e.to_string()))?;
        }
        fs::write(path, rendered)
            .map_err(|e| GapAnalyzerError::file_error(&path.display().to_string(), "write", &e.to_string()))
    }

    async fn serve_command(&self, port: Option<u16>) -> GapResult<()> {
        let config = self.load_config()?;
        let analyzer = Arc::new(GapAnalyzer::from_config(&config.analyzer)?);

        let port = port.unwrap_or(config.server.port);
        let addr: SocketAddr = format!("{}:{}", config.server.host, port).parse().map_err(|_| {
            GapAnalyzerError::config_error(
                &format!("'{}' is not a valid listen address", config.server.host),
                Some("server.host"),
                Some("Use an IP address such as 127.0.0.1"),
            )
        })?;

        AnalysisServer::new(analyzer).run(addr).await
    }

    fn validate_command(&self) -> GapResult<()> {
        let path = self
            .config_path
            .clone()
            .unwrap_or_else(ConfigManager::default_config_path);
        log::info!("🔎 Validating configuration: {}", path.display());

        let config = ConfigManager::load(self.config_path.as_deref())?;
        let validation = ConfigManager::validation_result(&config);
        validation.print_summary();

        if validation.is_valid {
            Ok(())
        } else {
            Err(GapAnalyzerError::config_error(
                &format!("{} configuration errors", validation.errors.len()),
                None,
                None,
            ))
        }
    }

    fn catalog_command(&self) -> GapResult<()> {
        let config = self.load_config()?;
        let analyzer = GapAnalyzer::from_config(&config.analyzer)?;
        ReportLogger::print_catalog(analyzer.catalog());
        Ok(())
    }
}
