use std::{env, time::Duration};

use log::debug;
use ureq::{Agent, AgentBuilder, Proxy};
use url::{Host, Url};

pub fn build_agent(endpoint: &str, timeout: Duration) -> Agent {
	let agent_builder = AgentBuilder::new().timeout(timeout);

	match env_proxy(endpoint, |name| env::var(name).ok()) {
		Some(proxy) => agent_builder.proxy(proxy).build(),
		None => agent_builder.build(),
	}
}

/// Proxy for `endpoint` taken from the scheme's `<scheme>_proxy`
/// variable, unless the host is loopback or listed in `no_proxy`.
fn env_proxy<F>(endpoint: &str, var: F) -> Option<Proxy>
where
	F: Fn(&str) -> Option<String>,
{
	let url = match Url::parse(endpoint) {
		Ok(url) => url,
		Err(err) => {
			debug!("not resolving proxy for `{}`: {}", endpoint, err);
			return None;
		}
	};

	let host = url.host()?;

	if is_loopback(&host) {
		return None;
	}

	let no_proxy = var("no_proxy").or_else(|| var("NO_PROXY"));

	if let Some(no_proxy) = no_proxy {
		if no_proxy_matches(&no_proxy, &host.to_string()) {
			return None;
		}
	}

	let names = match url.scheme() {
		"https" => ["https_proxy", "HTTPS_PROXY"],
		"http" => ["http_proxy", "HTTP_PROXY"],
		_ => return None,
	};

	let env_proxy = names
		.iter()
		.filter_map(|name| var(name))
		.find(|value| !value.is_empty())?;

	match Proxy::new(&env_proxy) {
		Ok(proxy) => {
			debug!("using proxy: {}", env_proxy);
			Some(proxy)
		}
		Err(err) => {
			debug!("ignoring proxy `{}`: {}", env_proxy, err);
			None
		}
	}
}

fn is_loopback(host: &Host<&str>) -> bool {
	match host {
		Host::Domain(domain) => domain.eq_ignore_ascii_case("localhost"),
		Host::Ipv4(ip) => ip.is_loopback(),
		Host::Ipv6(ip) => ip.is_loopback(),
	}
}

fn no_proxy_matches(no_proxy: &str, host: &str) -> bool {
	no_proxy
		.split(',')
		.map(str::trim)
		.filter(|entry| !entry.is_empty())
		.any(|entry| {
			if entry == "*" {
				return true;
			}

			let entry = entry.trim_start_matches('.').to_ascii_lowercase();

			host == entry || host.ends_with(&format!(".{}", entry))
		})
}
