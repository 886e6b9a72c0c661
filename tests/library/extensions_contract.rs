use crate::harness::{TestContext, templates};
use nodecfg::{BuildConfig, ProcessName, Topology, TopologySettings};

fn enabled_extensions(ctx: &TestContext, topology: Topology, process: ProcessName) -> Vec<String> {
    ctx.read_output(topology.dir_name(), &process.extensions_file_name())
        .lines()
        .filter_map(|line| line.strip_suffix(" = true"))
        .filter_map(|key| key.strip_prefix("extension."))
        .map(str::to_string)
        .collect()
}

fn assert_enabled_exactly(
    ctx: &TestContext,
    topology: Topology,
    process: ProcessName,
    expected: &[String],
) {
    let mut enabled = enabled_extensions(ctx, topology, process);
    enabled.sort();
    let mut expected = expected.to_vec();
    expected.sort();
    expected.dedup();
    assert_eq!(enabled, expected, "{topology}/{process}");
}

#[test]
fn configured_extensions_are_enabled_per_process() {
    let ctx = TestContext::new();
    nodecfg::build(&BuildConfig::new(ctx.template_dir(), ctx.build_dir())).unwrap();

    for topology in Topology::ALL {
        let settings = TopologySettings::for_topology(topology);
        let check = |process, expected| assert_enabled_exactly(&ctx, topology, process, expected);
        check(ProcessName::Server, settings.server_extensions());
        check(ProcessName::Recovery, settings.recovery_extensions());
        if settings.has_broker() {
            check(ProcessName::Broker, settings.broker_extensions());
        }
    }
}

#[test]
fn unlisted_extensions_keep_template_default() {
    let ctx = TestContext::new();
    nodecfg::build(&BuildConfig::new(ctx.template_dir(), ctx.build_dir())).unwrap();

    let never = format!("extension.{} = false", templates::EXTENSION_NEVER_ENABLED);
    for topology in ["peer", "api", "dual"] {
        let content = ctx.read_output(topology, "config-extensions-server.properties");
        assert!(content.contains(&never), "{topology} should keep {never}");
    }

    let peer_recovery = ctx.read_output("peer", "config-extensions-recovery.properties");
    assert!(peer_recovery.contains("extension.hashcache = true\n"));
    assert!(peer_recovery.contains("extension.harvesting = false\n"));
}
