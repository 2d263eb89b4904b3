//! Network helper command handlers.

use owo_colors::OwoColorize;
use tabled::Tabled;

use onetap_core::network::{self, IpInfo, SubnetInfo};

use crate::cli::{GlobalOpts, NetArgs, NetCommand};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled, serde::Serialize)]
struct PortEntry {
    #[tabled(rename = "Port")]
    port: u16,
    #[tabled(rename = "Service")]
    service: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&(u16, &str, &str)> for PortEntry {
    fn from(&(port, service, description): &(u16, &str, &str)) -> Self {
        Self {
            port,
            service: service.to_owned(),
            description: description.to_owned(),
        }
    }
}

// ── Detail views ────────────────────────────────────────────────────

fn ip_detail(info: &IpInfo, colored: bool) -> String {
    let scope = match info.private {
        Some(true) => "private",
        Some(false) => "public",
        None => "n/a",
    };
    let scope = if colored && info.private == Some(true) {
        scope.yellow().to_string()
    } else if colored && info.private == Some(false) {
        scope.green().to_string()
    } else {
        scope.to_owned()
    };
    [
        format!("Address: {}", info.address),
        format!("Version: {}", info.version),
        format!("Scope:   {scope}"),
    ]
    .join("\n")
}

fn subnet_detail(s: &SubnetInfo) -> String {
    [
        format!("Network:   {}", s.network),
        format!("Broadcast: {}", s.broadcast),
        format!("Mask:      {}", s.mask),
        format!("Prefix:    /{}", s.prefix),
        format!("Hosts:     {}", s.host_count),
    ]
    .join("\n")
}

fn port_detail(e: &PortEntry) -> String {
    [
        format!("Port:        {}", e.port),
        format!("Service:     {}", e.service),
        format!("Description: {}", e.description),
    ]
    .join("\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: NetArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let format = global.output_format();
    match args.command {
        NetCommand::CheckIp { address } => {
            let info = network::inspect_ip(&address)?;
            let colored = output::should_color(&global.color_mode());
            let out = output::render_single(
                &format,
                &info,
                |i| ip_detail(i, colored),
                |i| i.address.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        NetCommand::Subnet { cidr } => {
            let info = network::subnet(&cidr)?;
            let out =
                output::render_single(&format, &info, subnet_detail, |s| s.network.to_string());
            output::print_output(&out, global.quiet);
            Ok(())
        }

        NetCommand::Ports { port } => match port {
            Some(number) => {
                let (service, description) =
                    network::port_lookup(number).ok_or_else(|| CliError::NotFound {
                        resource_type: "port".into(),
                        identifier: number.to_string(),
                        list_command: "net ports".into(),
                    })?;
                let entry = PortEntry {
                    port: number,
                    service: service.to_owned(),
                    description: description.to_owned(),
                };
                let out =
                    output::render_single(&format, &entry, port_detail, |e| e.service.clone());
                output::print_output(&out, global.quiet);
                Ok(())
            }
            None => {
                let entries: Vec<PortEntry> =
                    network::WELL_KNOWN_PORTS.iter().map(PortEntry::from).collect();
                let out = output::render_list(
                    &format,
                    &entries,
                    |e| PortEntry {
                        port: e.port,
                        service: e.service.clone(),
                        description: e.description.clone(),
                    },
                    |e| e.port.to_string(),
                );
                output::print_output(&out, global.quiet);
                Ok(())
            }
        },
    }
}
