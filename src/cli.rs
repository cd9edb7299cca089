use clap::Parser;

/// Inventory BitLocker recovery key escrow state recorded in Active Directory
#[derive(Parser, Debug)]
#[command(name = "bitlocker-inventory")]
#[command(version)]
#[command(
    about = "Inventory BitLocker recovery key escrow state recorded in Active Directory",
    long_about = None
)]
pub struct Args {
    /// Distinguished name of the subtree to enumerate (defaults to the
    /// configured base DN, i.e. the entire directory)
    #[arg(short, long)]
    pub scope: Option<String>,

    /// Include endpoints whose operating system is a server edition
    #[arg(long)]
    pub include_servers: bool,

    /// Exclude endpoints not seen within this many days (0 disables)
    #[arg(long, value_name = "DAYS")]
    pub max_last_logon_age_days: Option<u32>,

    /// Case-insensitive substring filter applied to the report before export
    /// (matches computer name, operating system, or distinguished name)
    #[arg(short, long, value_name = "QUERY")]
    pub filter: Option<String>,

    /// Report destination ('-' for stdout; defaults to a timestamped
    /// BitLockerReport_*.csv in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Configuration file path (defaults to bitlocker-inventory.config.yml
    /// in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["bitlocker-inventory"]);

        assert_eq!(args.scope, None);
        assert!(!args.include_servers);
        assert_eq!(args.max_last_logon_age_days, None);
        assert_eq!(args.filter, None);
        assert_eq!(args.output, None);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_all_options() {
        let args = Args::parse_from([
            "bitlocker-inventory",
            "--scope",
            "OU=Workstations,DC=contoso,DC=com",
            "--include-servers",
            "--max-last-logon-age-days",
            "90",
            "--filter",
            "contoso",
            "--output",
            "report.csv",
            "--config",
            "custom.yml",
        ]);

        assert_eq!(
            args.scope.as_deref(),
            Some("OU=Workstations,DC=contoso,DC=com")
        );
        assert!(args.include_servers);
        assert_eq!(args.max_last_logon_age_days, Some(90));
        assert_eq!(args.filter.as_deref(), Some("contoso"));
        assert_eq!(args.output.as_deref(), Some("report.csv"));
        assert_eq!(args.config.as_deref(), Some("custom.yml"));
    }

    #[test]
    fn test_short_options() {
        let args = Args::parse_from([
            "bitlocker-inventory",
            "-s",
            "DC=contoso,DC=com",
            "-f",
            "ws-",
            "-o",
            "-",
        ]);

        assert_eq!(args.scope.as_deref(), Some("DC=contoso,DC=com"));
        assert_eq!(args.filter.as_deref(), Some("ws-"));
        assert_eq!(args.output.as_deref(), Some("-"));
    }

    #[test]
    fn test_invalid_age_rejected() {
        let result = Args::try_parse_from([
            "bitlocker-inventory",
            "--max-last-logon-age-days",
            "not-a-number",
        ]);
        assert!(result.is_err());
    }
}
