//! Naming Constants Test
//!
//! Verifies the published names and the display strings derived from them.

use pwi_core::app_info;

#[test]
fn test_concrete_names() {
    assert_eq!(app_info::NAME, "packwiz-installer");
    assert_eq!(app_info::BOOTSTRAP_NAME, "packwiz-installer-bootstrap");
    assert_eq!(app_info::MODIFIER, "Modified by Venti_Lynn");
    assert_eq!(app_info::DISPLAY_NAME, "packwiz-installer (Modified by Venti_Lynn)");
    assert_eq!(
        app_info::BOOTSTRAP_DISPLAY_NAME,
        "packwiz-installer-bootstrap (Modified by Venti_Lynn)"
    );
}

#[test]
fn test_concurrent_reads() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| app_info::BOOTSTRAP_DISPLAY_NAME))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), app_info::BOOTSTRAP_DISPLAY_NAME);
    }
}
