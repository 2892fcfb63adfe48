use clap::Subcommand;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::guard::GuardPolicy;

#[derive(Subcommand)]
pub enum PolicyCommands {
    #[command(about = "Print the active access policy")]
    Show,
}

pub async fn handle(cmd: PolicyCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        PolicyCommands::Show => show(&output_format),
    }
}

fn show(output_format: &OutputFormat) -> anyhow::Result<()> {
    let policy = GuardPolicy::default();

    match output_format {
        OutputFormat::Json => {
            let value = json!({
                "login_path": policy.login_path(),
                "admin_home": policy.admin_home(),
                "manager_home": policy.manager_home(),
                "admin_only": policy.admin_only(),
                "manager_only": policy.manager_only(),
                "exclusions": {
                    "prefixes": policy.exclusions().prefixes(),
                    "exact": policy.exclusions().exact(),
                    "extensions": policy.exclusions().extensions()
                }
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            println!("Login page:        {}", policy.login_path());
            println!("Admin home:        {}", policy.admin_home());
            println!("Manager home:      {}", policy.manager_home());
            println!("Admin only:        {}", policy.admin_only().join(", "));
            println!("Manager only:      {}", policy.manager_only().join(", "));
            println!("Public prefixes:   {}", policy.exclusions().prefixes().join(", "));
            println!("Public exact:      {}", policy.exclusions().exact().join(", "));
            println!("Public extensions: {}", policy.exclusions().extensions().join(", "));
        }
    }

    Ok(())
}
