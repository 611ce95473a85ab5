use roster_data::{Member, State};

macro_rules! next_attr {
    ($old:ident, $new:ident) => {
        if $old != $new {
            format!(" -> {}", $new)
        } else {
            "".to_string()
        }
    };
}

pub trait PrintFormatted {
    fn print_formatted(&self);
}

fn format_groups(member: &Member) -> String {
    if member.groups.is_empty() {
        return "None".to_string();
    }
    member.groups.iter().cloned().collect::<Vec<_>>().join(", ")
}

fn format_dues(member: &Member) -> &'static str {
    if member.has_paid_dues { "paid" } else { "open" }
}

impl PrintFormatted for Member {
    fn print_formatted(&self) {
        println!("Email:\t\t\t{}", self.email);
        println!("Dues:\t\t\t{}", format_dues(self));
        println!("Groups:\t\t\t{}", format_groups(self));
    }
}

impl PrintFormatted for (Member, Member) {
    fn print_formatted(&self) {
        let (old, new) = self;

        let dues_old = format_dues(old);
        let dues_new = format_dues(new);
        let groups_old = format_groups(old);
        let groups_new = format_groups(new);

        println!("Email:\t\t\t{}", old.email);
        let next_dues = next_attr!(dues_old, dues_new);
        println!("Dues:\t\t\t{}{}", dues_old, next_dues);
        let next_groups = next_attr!(groups_old, groups_new);
        println!("Groups:\t\t\t{}{}", groups_old, next_groups);
    }
}

impl PrintFormatted for Vec<Member> {
    fn print_formatted(&self) {
        println!("{:<36}\t{:<6}\t{}", "Email", "Dues", "Groups");
        println!("{:-<80}", "-");

        for member in self {
            println!(
                "{:<36}\t{:<6}\t{}",
                member.email,
                format_dues(member),
                format_groups(member),
            );
        }
    }
}

impl PrintFormatted for State {
    fn print_formatted(&self) {
        let reset_at = match self.semester_reset_at {
            Some(at) => at.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => "Never".to_string(),
        };
        println!("Last reset:\t\t{}", reset_at);
    }
}
