//! VNF resource commands

use crate::api::{self, VnfInstanceService};
use crate::cli::display::{StatusIcon, TableRenderer};
use crate::domain::config::{apply_to_plugin_conf, PluginConf};
use crate::domain::definition::ResourceKind;
use crate::domain::package::{DescriptorSource, LocalDescriptorSource};
use crate::infrastructure::kubernetes::{ClientFactory, ResourceClients};
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use clap::{Args, Parser};
use colored::Colorize;
use kube::api::DeleteParams;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Environment variable naming the configuration file when --config-file is absent
const CONF_FILE_ENV: &str = "VNF_KUBE_CONF_FILE";

/// Options shared by every command that talks to the cluster
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Path to the plugin configuration file (TOML)
    /// If not provided, reads VNF_KUBE_CONF_FILE or falls back to defaults
    #[arg(long, value_name = "PATH")]
    pub config_file: Option<String>,

    /// Path to kubeconfig file
    /// If not specified, uses default kubeconfig resolution (in-cluster, KUBECONFIG env or ~/.kube/config)
    #[arg(long)]
    pub kubeconfig: Option<String>,

    /// Kubernetes context to use
    #[arg(long)]
    pub context: Option<String>,

    /// Kubernetes namespace
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,

    /// Dynamic configuration properties to override file settings (-D key=value)
    ///
    /// Server: server.bind, server.workers
    /// Kubernetes: kubernetes.config.file, kubernetes.context, kubernetes.namespace
    /// VNF: vnf.list-limit, vnf.csar-root
    ///
    /// Example: -Dkubernetes.namespace=vnf -Dvnf.list-limit=50
    #[arg(short = 'D', value_name = "KEY=VALUE")]
    pub properties: Vec<String>,
}

impl ConnectionArgs {
    /// Resolve configuration: command line > -D properties > config file > defaults
    pub fn load_conf(&self) -> anyhow::Result<PluginConf> {
        let mut conf = if let Some(ref path) = self.config_file {
            PluginConf::from(path)?
        } else if let Ok(env_path) = std::env::var(CONF_FILE_ENV) {
            PluginConf::from(&env_path)?
        } else {
            PluginConf::default()
        };

        if !self.properties.is_empty() {
            let dynamic_configs = parse_dynamic_configs(&self.properties)
                .map_err(|e| anyhow::anyhow!("Failed to parse dynamic configs: {}", e))?;
            apply_to_plugin_conf(&dynamic_configs, &mut conf);
        }

        if let Some(ref kubeconfig) = self.kubeconfig {
            conf.kubernetes.kubeconfig = Some(kubeconfig.clone());
        }
        if let Some(ref context) = self.context {
            conf.kubernetes.context = Some(context.clone());
        }
        if let Some(ref namespace) = self.namespace {
            conf.kubernetes.namespace = namespace.clone();
        }

        Ok(conf)
    }
}

async fn connect(conf: &PluginConf) -> anyhow::Result<ResourceClients> {
    let clients = ClientFactory::kubeconfig()
        .with_namespace(conf.kubernetes.namespace.clone())
        .new_client(&conf.connection_descriptor())
        .await?;
    Ok(clients)
}

#[derive(Parser, Debug, Clone)]
pub struct ServeCommand {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Address the HTTP API listens on (e.g. 0.0.0.0:8081)
    #[arg(long)]
    pub bind: Option<String>,

    /// HTTP worker threads
    #[arg(long)]
    pub workers: Option<usize>,

    /// Directory descriptor package references are resolved against
    #[arg(long, value_name = "PATH")]
    pub csar_root: Option<String>,
}

impl ServeCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let mut conf = self.connection.load_conf()?;
        if let Some(ref bind) = self.bind {
            conf.server.bind = bind.clone();
        }
        if let Some(workers) = self.workers {
            conf.server.workers = Some(workers);
        }
        if let Some(ref root) = self.csar_root {
            conf.vnf.csar_root = root.clone();
        }
        conf.validate()?;

        let clients = connect(&conf).await?;
        let source: Arc<dyn DescriptorSource> =
            Arc::new(LocalDescriptorSource::new(&conf.vnf.csar_root));
        let service = Data::new(VnfInstanceService::new(clients, source, conf.vnf.list_limit));

        info!(
            bind = %conf.server.bind,
            namespace = %conf.kubernetes.namespace,
            csar_root = %conf.vnf.csar_root,
            "Starting VNF instance API"
        );

        let mut server = HttpServer::new(move || {
            App::new()
                .wrap(Logger::default())
                .app_data(service.clone())
                .configure(api::configure)
        });
        if let Some(workers) = conf.server.workers {
            server = server.workers(workers);
        }

        server.bind(conf.server.bind.as_str())?.run().await?;
        Ok(())
    }
}

#[derive(Parser, Debug, Clone)]
pub struct CreateCommand {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Resource YAML file (multi-document allowed) or package directory
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: PathBuf,
}

impl CreateCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let conf = self.connection.load_conf()?;
        conf.validate()?;

        // Root the source at the file's parent so the reference stays relative.
        let path = std::fs::canonicalize(&self.file)
            .map_err(|e| anyhow::anyhow!("Cannot open {}: {}", self.file.display(), e))?;
        let (root, reference) = match (path.parent(), path.file_name()) {
            (Some(parent), Some(name)) => (parent.to_path_buf(), name.to_string_lossy().into_owned()),
            _ => (path.clone(), ".".to_string()),
        };

        let source = LocalDescriptorSource::new(root);
        let definitions = source.load(&reference).await?;
        if definitions.is_empty() {
            println!("No resources found in {}", self.file.display());
            return Ok(());
        }

        let clients = connect(&conf).await?;
        for definition in definitions {
            let kind = definition.kind();
            let name = clients.create(definition).await?;
            println!(
                "{} {} {} created",
                StatusIcon::SUCCESS.green(),
                kind,
                name.bold()
            );
        }

        Ok(())
    }
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Resource kind (deployment, service)
    #[arg(long, short = 'k', default_value = "deployment")]
    pub kind: ResourceKind,

    /// Maximum number of names to return (defaults to vnf.list_limit)
    #[arg(long, short = 'l')]
    pub limit: Option<u32>,
}

impl ListCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let conf = self.connection.load_conf()?;
        conf.validate()?;

        let limit = self.limit.unwrap_or(conf.vnf.list_limit);
        let clients = connect(&conf).await?;
        let names = clients.list(self.kind, limit).await?;

        let renderer = TableRenderer::new();
        let output = renderer.render_resource_list(self.kind, &conf.kubernetes.namespace, &names);
        println!("{}", output);

        Ok(())
    }
}

#[derive(Parser, Debug, Clone)]
pub struct GetCommand {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[arg(long, short = 'k', default_value = "deployment")]
    pub kind: ResourceKind,

    /// Resource name
    pub name: String,
}

impl GetCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let conf = self.connection.load_conf()?;
        conf.validate()?;

        let clients = connect(&conf).await?;
        let found = clients.get(self.kind, &self.name).await?;

        let renderer = TableRenderer::new();
        let output = renderer.render_lookup(
            self.kind,
            &conf.kubernetes.namespace,
            &self.name,
            found.is_some(),
        );
        println!("{}", output);

        Ok(())
    }
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[arg(long, short = 'k', default_value = "deployment")]
    pub kind: ResourceKind,

    /// Resource name
    pub name: String,

    /// Delete dependents in the background instead of waiting on them
    #[arg(long)]
    pub background: bool,
}

impl DeleteCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let conf = self.connection.load_conf()?;
        conf.validate()?;

        let params = if self.background {
            DeleteParams::background()
        } else {
            DeleteParams::default()
        };

        let clients = connect(&conf).await?;
        clients.delete(self.kind, &self.name, params).await?;

        println!(
            "{} {} {} deleted",
            StatusIcon::SUCCESS.green(),
            self.kind,
            self.name.bold()
        );
        Ok(())
    }
}

/// Parse dynamic configuration properties from -D key=value format
fn parse_dynamic_configs(configs: &[String]) -> Result<HashMap<String, String>, String> {
    let mut map = HashMap::new();

    for config in configs {
        let parts: Vec<&str> = config.splitn(2, '=').collect();
        if parts.len() != 2 {
            return Err(format!(
                "Invalid config format: '{}'. Expected 'key=value'",
                config
            ));
        }

        let key = parts[0].trim();
        let value = parts[1].trim();

        if key.is_empty() {
            return Err(format!("Empty key in config: '{}'", config));
        }

        map.insert(key.to_string(), value.to_string());
    }

    Ok(map)
}
