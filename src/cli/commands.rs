// CLI command definitions

use super::vnf::{CreateCommand, DeleteCommand, GetCommand, ListCommand, ServeCommand};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "vnf-kube",
    version,
    about = "Kubernetes resource plugin for VNF instances",
    long_about = "Instantiates VNF descriptor packages as Kubernetes Deployments and Services, \
                  either through the HTTP API (serve) or directly from the command line"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Run the VNF instance HTTP API
    Serve(ServeCommand),

    /// Create the resources described by a YAML file or package directory
    Create(CreateCommand),

    /// List resource names of one kind
    List(ListCommand),

    /// Check whether a named resource exists
    Get(GetCommand),

    /// Delete a resource by name
    Delete(DeleteCommand),
}
