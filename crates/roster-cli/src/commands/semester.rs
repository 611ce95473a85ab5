use anyhow::Result;
use clap::Args;
use inquire::Confirm;

use roster_data::{MemberFilter, State};
use roster_db::{schema, Connection};
use roster_membership::MemberService;

use crate::formatting::PrintFormatted;

#[derive(Args, Debug)]
pub struct Init {}

impl Init {
    /// Install the schema into the members database
    pub async fn run(self, db: &Connection) -> Result<()> {
        schema::install(db).await?;
        println!("Database initialized.");
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct Status {}

impl Status {
    pub async fn run(self, members: &MemberService<Connection>) -> Result<()> {
        let total = members.get_members().await?.len();
        let paid = members
            .find_members(&MemberFilter {
                has_paid_dues: Some(true),
                ..Default::default()
            })
            .await?
            .len();
        let state: State = members.last_reset().await?;

        println!("Members:\t\t{}", total);
        println!("Dues paid:\t\t{}", paid);
        state.print_formatted();
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct Reset {
    /// Do not ask for confirmation
    #[clap(short, long)]
    pub yes: bool,
}

impl Reset {
    /// Run the semester reset
    pub async fn run(self, members: &MemberService<Connection>) -> Result<()> {
        let total = members.get_members().await?.len();

        // Confirm reset
        if !self.yes {
            let ok = Confirm::new(&format!(
                    "Reset dues and groups of {} members?", total))
                .with_default(false)
                .prompt()?;
            if !ok {
                return Ok(());
            }
        }

        let modified = members.reset().await?;
        println!("Reset {} members.", modified);
        Ok(())
    }
}
