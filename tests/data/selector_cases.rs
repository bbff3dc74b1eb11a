// Selector extraction test cases.
//
// Queries are taken from common exporter dashboards (node, mongodb, kube-state)
// plus hand-written inputs for the degenerate cases.
//
// Format: (query, &[(metric, &[label_names])])

pub type Expected = &'static [(&'static str, &'static [&'static str])];

/// Well-formed queries
pub const VALID_QUERIES: &[(&str, Expected)] = &[
    // Plain selectors
    (r#"up{job="node"}"#, &[("up", &["job"])]),
    (
        r#"metric_name{label1="x",label2="y"}"#,
        &[("metric_name", &["label1", "label2"])],
    ),
    (
        r#"go_gc_duration_seconds{instance="localhost:9090", job="alertmanager"}"#,
        &[("go_gc_duration_seconds", &["instance", "job"])],
    ),
    // Recording rule names keep their colons
    (
        r#"job:http_requests:rate5m{job="api"}"#,
        &[("job:http_requests:rate5m", &["job"])],
    ),
    // All matcher operators
    (
        r#"m{a="1", b!="2", c=~"3.*", d!~"4|5"}"#,
        &[("m", &["a", "b", "c", "d"])],
    ),
    // Anonymous selector
    (r#"{__name__="up"}"#, &[("", &["__name__"])]),
    // Inside functions and ranges
    (
        r#"rate(node_cpu_seconds_total{mode="idle"}[5m])"#,
        &[("node_cpu_seconds_total", &["mode"])],
    ),
    (
        r#"histogram_quantile(0.99, sum by (le) (rate(http_request_duration_seconds_bucket{handler="/api"}[5m])))"#,
        &[("http_request_duration_seconds_bucket", &["handler"])],
    ),
    // Binary expressions keep left-to-right order
    (
        r#"m1{a="1"} + m2{b="2"}"#,
        &[("m1", &["a"]), ("m2", &["b"])],
    ),
    (
        r#"mongodb_ss_mem_resident{instance=~"$instance"} * 1024 * 1024 / on(instance) node_memory_MemTotal_bytes{instance=~"$instance"}"#,
        &[
            ("mongodb_ss_mem_resident", &["instance"]),
            ("node_memory_MemTotal_bytes", &["instance"]),
        ],
    ),
    // Dashboard template variables inside values
    (
        r#"kube_pod_info{namespace="$namespace",pod=~"$pod",cluster="$cluster"}"#,
        &[("kube_pod_info", &["namespace", "pod", "cluster"])],
    ),
    // Whitespace and newlines around matchers
    (
        "up{\n  job = \"node\",\n  instance = \"a\"\n}",
        &[("up", &["job", "instance"])],
    ),
    // Empty braces
    ("up{}", &[("up", &[""])]),
];

/// Label values that look like structure
pub const QUOTED_VALUE_QUERIES: &[(&str, Expected)] = &[
    // Comma inside a value
    (r#"m{a="x,y",b="z"}"#, &[("m", &["a", "b"])]),
    // Operators and label-like text inside a value
    (r#"m{a="b=c,d!=e"}"#, &[("m", &["a"])]),
    // Empty value
    (r#"m{a="",b="1"}"#, &[("m", &["a", "b"])]),
    // Regex alternation with commas
    (r#"m{path=~"/a,/b|/c"}"#, &[("m", &["path"])]),
];

/// Inputs that produce degenerate but well-defined records
pub const DEGENERATE_QUERIES: &[(&str, Expected)] = &[
    // Unterminated group: empty body
    (r#"m{a="1""#, &[("m", &[""])]),
    ("{", &[("", &[""])]),
    // Nested braces are rediscovered
    ("m{a={b}}", &[("m", &["ab"]), ("", &["b"])]),
    (r#"m{path=~"a{2}"}"#, &[("m", &["path"]), ("a", &["2"])]),
    // Trailing comma keeps an empty label
    (r#"m{a="1",}"#, &[("m", &["a", ""])]),
    // Duplicates kept in order
    (r#"m{a="1",a="2"}"#, &[("m", &["a", "a"])]),
    // Metric run is taken as-is, even if it starts with a digit
    ("5m{x}", &[("5m", &["x"])]),
    // Single-quoted values are not stripped
    ("m{a='x,y'}", &[("m", &["ax", "y"])]),
    // Escaped quote ends the stripped literal early and shifts the pairing
    (r#"m{a="x\"y",b="z"}"#, &[("m", &["ayz"])]),
];

/// Queries without any selector group
pub const NO_SELECTOR_QUERIES: &[&str] = &[
    "",
    "up",
    "1 + 2",
    "sum(rate(http_requests_total[5m])) by (job)",
    r#"label_replace(up, "dst", "$1", "src", "(.*)")"#,
    "}",
];
