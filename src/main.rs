use anyhow::{bail, Context, Result};
use clap::Parser;
use http::Method;
use portal_bind::{list_interfaces, parse_source_ip, Portal};
use std::io::Write;
use std::net::IpAddr;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "portal-bind")]
#[command(about = "Log in to a campus captive portal from the interface owning a given IP")]
struct Args {
    /// Shows the addresses that can be used as source IP
    #[arg(short, long)]
    list: bool,

    /// Account identifier
    #[arg(short, long, required_unless_present = "list")]
    user: Option<String>,

    /// Account password
    #[arg(short, long, env = "PORTAL_PASSWORD", hide_env_values = true, required_unless_present = "list")]
    password: Option<String>,

    /// Extra portal parameter, passed through untouched
    #[arg(long)]
    extra: Option<String>,

    /// Source IPv4 address; the request leaves through the interface that owns it
    #[arg(short, long, required_unless_present = "list")]
    ip: Option<String>,

    /// Portal variant: qsh-edu, qsh-dorm-dx or sh-edu
    #[arg(short = 't', long, default_value = "qsh-edu")]
    login_type: String,

    /// Request URL (defaults to the root of the selected portal server)
    #[arg(long)]
    url: Option<String>,

    /// HTTP method
    #[arg(short, long, default_value = "GET")]
    method: String,

    /// User-Agent header value; omitted when empty
    #[arg(short = 'a', long, default_value = "")]
    user_agent: String,

    /// Disable logs
    #[arg(short, long)]
    quiet: bool,

    /// Log debug details
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,
}

/// List non-loopback IPv4 addresses per interface
fn detect_interfaces() -> Result<()> {
    println!("--- Listing the available source addresses");

    for iface in list_interfaces()? {
        for addr in &iface.addresses {
            if let IpAddr::V4(ipv4) = addr.ip() {
                if !ipv4.is_loopback() {
                    println!("[+] {}, IPv4:{}", iface.name, ipv4);
                }
            }
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.list {
        return detect_interfaces();
    }

    if !args.quiet {
        init_logging(args.verbose)?;
    }

    let (Some(user), Some(password), Some(ip)) = (args.user, args.password, args.ip) else {
        bail!("--user, --password and --ip are required");
    };
    let source_ip = parse_source_ip(&ip)?;
    let portal = Portal::new(user, password, args.extra, source_ip, &args.login_type)?;

    let method = Method::from_bytes(args.method.to_ascii_uppercase().as_bytes())
        .with_context(|| format!("Invalid HTTP method {}", args.method))?;
    let url = args.url.unwrap_or_else(|| portal.default_url());

    info!(
        "{} login for {} via {} -> {}",
        portal.login_type(),
        portal.username(),
        portal.source_ip(),
        portal.server_ip()
    );

    let body = portal
        .request(&url, method, &args.user_agent)
        .await
        .with_context(|| format!("Request to {} failed", url))?;

    info!("Received {} bytes", body.len());
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&body)?;
    stdout.flush()?;
    Ok(())
}
