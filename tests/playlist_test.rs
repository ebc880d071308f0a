use spofolcli::spotify;

#[tokio::test]
async fn test_add_tracks_with_no_uris_is_a_noop() {
    // Zero accumulated URIs must not produce a remote call; the bogus token
    // and playlist id would make any real request fail loudly.
    let result = spotify::playlist::add_tracks("not-a-token", "not-a-playlist", &[]).await;

    match result {
        Ok(None) => {}
        Ok(Some(_)) => panic!("no-op add reported a snapshot"),
        Err(e) => panic!("no-op add performed a request: {}", e),
    }
}
