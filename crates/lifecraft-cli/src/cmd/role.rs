use crate::output::print_json;
use clap::Subcommand;
use lifecraft_core::types::{Role, UserId};
use std::path::Path;

#[derive(Subcommand)]
pub enum RoleSubcommand {
    /// Assign a role: user, admin or super_admin
    Set { user: UserId, role: Role },

    /// Show a user's role
    Show { user: UserId },
}

pub fn run(root: &Path, subcmd: RoleSubcommand, json: bool) -> anyhow::Result<()> {
    let service = super::open_service(root)?;
    let (user, role) = match subcmd {
        RoleSubcommand::Set { user, role } => {
            service.set_role(&user, role)?;
            tracing::info!(user = %user, role = %role, "role updated");
            (user, role)
        }
        RoleSubcommand::Show { user } => {
            let role = service.role(&user)?;
            (user, role)
        }
    };

    if json {
        return print_json(&serde_json::json!({ "user": user, "role": role }));
    }
    println!("{user}: {role}");
    Ok(())
}
