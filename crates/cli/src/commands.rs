use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize a server version string
    Parse {
        /// Vendor family: "mysql" or "mariadb"
        #[arg(long)]
        vendor: String,

        #[arg(long, help = "Version string as reported by the driver")]
        server_version: String,
    },
    /// Resolve capabilities for a known vendor and version, without connecting
    Resolve {
        #[arg(long)]
        vendor: String,

        #[arg(
            long,
            help = "Version string as reported by the driver; omit when unknown"
        )]
        server_version: Option<String>,

        #[command(flatten)]
        table: TableArgs,

        #[command(flatten)]
        report: OutputArgs,
    },
    /// Connect to a server and resolve its capabilities
    Inspect {
        #[arg(
            short,
            long,
            help = "Connection string, defaults to PLATFORM_PROBE_DATABASE_URL"
        )]
        conn_str: Option<String>,

        #[arg(long, help = "Load environment variables from this file first")]
        env_file: Option<String>,

        #[arg(
            long,
            help = "Override the vendor detected from the reported version"
        )]
        vendor: Option<String>,

        #[command(flatten)]
        table: TableArgs,

        #[command(flatten)]
        report: OutputArgs,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct TableArgs {
    #[arg(
        long,
        help = "JSON column catalog; the audit log table is used when omitted"
    )]
    pub catalog: Option<String>,

    #[arg(
        long = "index",
        help = "Indexed column (repeatable); defaults to every catalog column"
    )]
    pub indexed: Vec<String>,
}

#[derive(clap::Args, Debug, Default)]
pub struct OutputArgs {
    #[arg(long, help = "Print the report as JSON instead of a table")]
    pub json: bool,

    #[arg(
        long,
        help = "If specified, writes the JSON report to this file instead of stdout"
    )]
    pub output: Option<String>,
}
