
use anyhow::Result;
use clap::{Subcommand, Args};
use inquire::Confirm;

use roster_data::{Member, MemberFilter};
use roster_db::Connection;
use roster_membership::MemberService;

use crate::formatting::PrintFormatted;

#[derive(Subcommand, Debug)]
pub enum Members {
    /// Show a member
    #[clap(name="show")]
    Show(ShowMember),
    /// List members
    #[clap(name="list")]
    List(ListMembers),
    /// Add a member
    #[clap(name="add")]
    Add(AddMember),
    /// Delete a member
    #[clap(name="delete")]
    Delete(DeleteMember),
    /// Subscribe a member to groups
    #[clap(name="subscribe")]
    Subscribe(SubscribeMember),
    /// Unsubscribe a member from groups
    #[clap(name="unsubscribe")]
    Unsubscribe(UnsubscribeMember),
    /// Mark the dues of a member as paid
    #[clap(name="pay")]
    Pay(PayDues),
}

impl Members {
    pub async fn run(self, members: &MemberService<Connection>) -> Result<()> {
        match self {
            Members::Show(cmd) => cmd.run(members).await,
            Members::List(cmd) => cmd.run(members).await,
            Members::Add(cmd) => cmd.run(members).await,
            Members::Delete(cmd) => cmd.run(members).await,
            Members::Subscribe(cmd) => cmd.run(members).await,
            Members::Unsubscribe(cmd) => cmd.run(members).await,
            Members::Pay(cmd) => cmd.run(members).await,
        }
    }
}

#[derive(Args, Debug)]
pub struct ShowMember {
    #[clap(short, long)]
    pub email: String,
}

impl ShowMember {
    /// Run the command and show a member
    pub async fn run(self, members: &MemberService<Connection>) -> Result<()> {
        let member = members.get_member(&self.email).await?;
        println!();
        member.print_formatted();
        println!();
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct ListMembers {
    #[clap(short, long)]
    pub group: Option<String>,
    /// Only members who paid their dues
    #[clap(long, conflicts_with = "unpaid")]
    pub paid: bool,
    /// Only members who did not pay their dues
    #[clap(long)]
    pub unpaid: bool,
}

impl ListMembers {
    fn filter(&self) -> MemberFilter {
        let has_paid_dues = match (self.paid, self.unpaid) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        MemberFilter {
            group: self.group.clone(),
            has_paid_dues,
            ..Default::default()
        }
    }

    /// Run the command and list members
    pub async fn run(self, members: &MemberService<Connection>) -> Result<()> {
        let found: Vec<Member> = members.find_members(&self.filter()).await?;
        println!("{} members.", found.len());
        found.print_formatted();

        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct AddMember {
    #[clap(short, long)]
    pub email: String,
}

impl AddMember {
    /// Run the command and add a member to the database
    pub async fn run(self, members: &MemberService<Connection>) -> Result<()> {
        let member = members.create_member(&self.email).await?;
        println!("Member {} added.", member.email);
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct DeleteMember {
    #[clap(short, long)]
    pub email: String,
}

impl DeleteMember {
    pub async fn run(self, members: &MemberService<Connection>) -> Result<()> {
        let member = members.get_member(&self.email).await?;
        println!();
        member.print_formatted();
        println!();
        let confirm = Confirm::new("Delete member from database?")
            .with_default(true);
        if !confirm.prompt()? {
            return Ok(());
        }
        members.delete_member(&member.email).await?;
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct SubscribeMember {
    #[clap(short, long)]
    pub email: String,
    #[clap(short, long = "group", required = true)]
    pub groups: Vec<String>,
}

impl SubscribeMember {
    pub async fn run(self, members: &MemberService<Connection>) -> Result<()> {
        let before = members.get_member(&self.email).await?;
        let after = members.subscribe(&self.email, &self.groups).await?;
        (before, after).print_formatted();
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct UnsubscribeMember {
    #[clap(short, long)]
    pub email: String,
    #[clap(short, long = "group", required = true)]
    pub groups: Vec<String>,
}

impl UnsubscribeMember {
    pub async fn run(self, members: &MemberService<Connection>) -> Result<()> {
        let before = members.get_member(&self.email).await?;
        let after = members.unsubscribe(&self.email, &self.groups).await?;
        (before, after).print_formatted();
        Ok(())
    }
}

#[derive(Args, Debug)]
pub struct PayDues {
    #[clap(short, long)]
    pub email: String,
}

impl PayDues {
    pub async fn run(self, members: &MemberService<Connection>) -> Result<()> {
        let member = members.pay_dues(&self.email).await?;
        member.print_formatted();
        Ok(())
    }
}
