// CLI command definitions

use super::manifests::{RenderCommand, TemplatesCommand};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "master-manifests",
    version,
    about = "Render cluster master resources from templates",
    long_about = "Renders master resource templates (service, ingress, deployment, pvc) for a managed cluster into Kubernetes objects"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Render one resource template and print the decoded object
    Render(RenderCommand),

    /// Show which templates exist for a resource name
    Templates(TemplatesCommand),
}
