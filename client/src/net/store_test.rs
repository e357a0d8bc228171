use super::*;

fn test_config() -> PortalConfig {
    PortalConfig::from_lookup(|key| match key {
        "PORTAL_BACKEND_URL" => Some("https://abcd.supabase.co".to_owned()),
        "PORTAL_BACKEND_ANON_KEY" => Some("anon".to_owned()),
        _ => None,
    })
    .unwrap()
}

#[test]
fn owned_by_keys_users_on_id() {
    let query = Query::owned_by(Collection::Users, "u1");
    assert_eq!(query.filters, vec![Filter { column: "id", value: "u1".to_owned() }]);
}

#[test]
fn owned_by_keys_other_collections_on_user_id() {
    for collection in [
        Collection::PersonalInfo,
        Collection::MedicalInfo,
        Collection::Lifestyle,
        Collection::EmergencyContacts,
    ] {
        let query = Query::owned_by(collection, "u1");
        assert_eq!(query.filters[0].column, "user_id");
    }
}

#[test]
fn params_render_filters_and_limit_in_order() {
    let query = Query::owned_by(Collection::EmergencyContacts, "u1")
        .eq("relationship", "Doctor")
        .limit(1);
    let params = query.params();
    assert_eq!(
        params,
        vec![
            ("select".to_owned(), "*".to_owned()),
            ("user_id".to_owned(), "eq.u1".to_owned()),
            ("relationship".to_owned(), "eq.Doctor".to_owned()),
            ("limit".to_owned(), "1".to_owned()),
        ]
    );
}

#[test]
fn params_without_limit_omit_limit() {
    let params = Query::owned_by(Collection::Lifestyle, "u1").params();
    assert!(params.iter().all(|(k, _)| k != "limit"));
}

#[test]
fn endpoint_joins_rest_path_and_table() {
    let store = RestRecordStore::new(&test_config(), "token");
    assert_eq!(
        store.endpoint(Collection::MedicalInfo),
        "https://abcd.supabase.co/rest/v1/medical_info"
    );
}

#[tokio::test]
async fn rest_store_is_unavailable_natively() {
    let store = RestRecordStore::new(&test_config(), "token");
    let err = store
        .select(&Query::owned_by(Collection::Users, "u1"))
        .await
        .unwrap_err();
    assert_eq!(err, StoreError::Unavailable);
}
