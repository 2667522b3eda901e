use super::*;

const REDACTED: &str = "(redacted)";

pub(super) fn handle_config_command(globals: &Globals, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::View { json } => {
            let mut cfg = globals.store.load()?;
            if json {
                if cfg.bearer_token.is_some() {
                    cfg.bearer_token = Some(REDACTED.to_string());
                }
                println!(
                    "{}",
                    serde_json::to_string_pretty(&cfg).context("serialize config json")?
                );
            } else {
                println!("path: {}", globals.store.path().display());
                println!(
                    "server: {}",
                    if cfg.api_address.is_empty() {
                        "(none)"
                    } else {
                        cfg.api_address.as_str()
                    }
                );
                println!("project: {}", cfg.default_project().unwrap_or("(none)"));
                println!("insecure_skip_tls_verify: {}", cfg.insecure_skip_tls_verify);
                println!(
                    "token: {}",
                    if cfg.bearer_token.is_some() {
                        "set"
                    } else {
                        "(none)"
                    }
                );
            }
        }
        ConfigCommands::SetProject { project } => {
            if project.is_empty() {
                anyhow::bail!("project must not be empty");
            }
            globals.store.update(|cfg| cfg.project = Some(project.clone()))?;
            println!("Default project set to {:?}", project);
        }
        ConfigCommands::SetServer { url } => {
            if url.is_empty() {
                anyhow::bail!("server address must not be empty");
            }
            let insecure = globals.insecure_skip_tls_verify;
            globals.store.update(|cfg| {
                cfg.api_address = url.trim_end_matches('/').to_string();
                cfg.insecure_skip_tls_verify = insecure;
            })?;
            println!("API server set to {}", url.trim_end_matches('/'));
        }
    }

    Ok(())
}
