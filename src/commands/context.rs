use std::path::PathBuf;

use keystone::config::{Config, Verbosity};
use keystone::domain::value_objects::BuildLayout;
use keystone::presentation::factory::{
    create_event_sink, create_workspace_use_case, ConcreteWorkspaceUseCase,
};
use keystone::presentation::output::{create_renderer, OutputFormat, ResultRenderer};
use keystone::presentation::Cli;

/// Settings shared by every command: where the workspace is, the merged
/// configuration and how to talk back.
pub struct CommandContext {
    pub root: PathBuf,
    pub config: Config,
    pub json: bool,
    pub verbose: u8,
    release_version: Option<String>,
}

impl CommandContext {
    pub fn new(cli: &Cli, config: Config) -> Self {
        let configured = match config.output.verbosity {
            Verbosity::Verbose => 1,
            Verbosity::Debug => 2,
            Verbosity::Quiet | Verbosity::Normal => 0,
        };
        Self {
            root: cli.workspace.clone(),
            json: cli.json,
            verbose: cli.verbose.max(configured),
            release_version: cli.release_version.clone(),
            config,
        }
    }

    pub fn use_case(&self, command: &'static str) -> ConcreteWorkspaceUseCase {
        create_workspace_use_case(
            &self.root,
            &self.config,
            self.release_version.clone(),
            create_event_sink(self.json, command),
        )
    }

    pub fn renderer(&self) -> Box<dyn ResultRenderer> {
        create_renderer(OutputFormat::from_json_flag(self.json), true, self.verbose)
    }

    pub fn layout(&self) -> BuildLayout {
        self.config.layout.build_layout()
    }

    /// Plan destination: `--out` as given, otherwise the configured plan
    /// file under the workspace root.
    pub fn plan_path(&self, out: Option<&std::path::Path>) -> PathBuf {
        match out {
            Some(path) => path.to_path_buf(),
            None => self.root.join(&self.config.layout.plan_file),
        }
    }
}
