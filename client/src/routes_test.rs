use super::*;

#[test]
fn link_edit_path_embeds_id_segment() {
    assert_eq!(link_edit_path(1), "/dashboard/channels/links/1/edit");
    assert_eq!(link_edit_path(42), "/dashboard/channels/links/42/edit");
}

#[test]
fn dashboard_targets_live_under_dashboard() {
    for path in [CHANNELS, ACCOUNT, BILLING, CHANNEL_NEW, LINK_NEW, CHANNEL_SETTINGS] {
        assert!(path.starts_with(DASHBOARD), "{path} should be under {DASHBOARD}");
    }
}

#[test]
fn channel_subroutes_live_under_channels() {
    for path in [CHANNEL_NEW, LINK_NEW, CHANNEL_SETTINGS] {
        assert!(path.starts_with(CHANNELS), "{path} should be under {CHANNELS}");
    }
}
