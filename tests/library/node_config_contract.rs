use crate::harness::TestContext;
use nodecfg::BuildConfig;

const NODE: &str = "config-node.properties";

#[test]
fn roles_and_flags_per_topology() {
    let ctx = TestContext::new();
    nodecfg::build(&BuildConfig::new(ctx.template_dir(), ctx.build_dir())).unwrap();

    let expectations =
        [("peer", "Peer", "true"), ("api", "Api", "false"), ("dual", "Api,Peer", "false")];
    for (topology, roles, fast_path) in expectations {
        let value = |key| ctx.property(topology, NODE, key);
        assert_eq!(value("roles").as_deref(), Some(roles));
        assert_eq!(value("enableSingleThreadPool").as_deref(), Some(fast_path));
        assert_eq!(value("enableAutoSyncCleanup").as_deref(), Some(fast_path));
        assert_eq!(value("port").as_deref(), Some("7900"));
    }
}

#[test]
fn node_config_keeps_line_count() {
    let ctx = TestContext::new();
    nodecfg::build(&BuildConfig::new(ctx.template_dir(), ctx.build_dir())).unwrap();

    let template = std::fs::read_to_string(ctx.template_dir().join(NODE)).unwrap();
    for topology in ["peer", "api", "dual"] {
        let output = ctx.read_output(topology, NODE);
        assert_eq!(output.lines().count(), template.lines().count());
        assert!(output.contains("host =\n"));
    }
}
