/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers::{self, CONSUMER_KEY, CONSUMER_SECRET};
    use flickr::oauth::injector::{
        OAUTH_CALLBACK, OAUTH_NONCE, OAUTH_SIGNATURE, OAUTH_TIMESTAMP, OAUTH_TOKEN,
        OAUTH_VERIFIER,
    };
    use flickr::oauth::{
        ConsumerCreds, HttpMethod, HttpRequest, Params, RequestSigner, RequestToken, sign,
        signature_base_string,
    };
    use flickr::{FlickrError, OUT_OF_BAND, Perms, UploadFile, UploadMetadata};

    // Recomputes the signature the way the provider would.
    fn verify_signature(request: &HttpRequest, token_secret: Option<&str>) {
        let mut params = request.params.clone();
        let sent = params.get(OAUTH_SIGNATURE).unwrap().to_string();
        params.remove(OAUTH_SIGNATURE);
        let base = signature_base_string(request.method, &request.url, &params).unwrap();
        assert_eq!(sign(&base, CONSUMER_SECRET, token_secret).unwrap(), sent);
    }

    fn request_token() -> RequestToken {
        RequestToken {
            token: "72157626737672178-022bbd2f4c2f3432".into(),
            token_secret: "fccb68c4e6103197".into(),
        }
    }

    #[test]
    fn request_token_pipeline_matches_fixed_signature() {
        let consumer = ConsumerCreds::new("K", "S").unwrap();
        let mut params = Params::new();
        params
            .push(OAUTH_CALLBACK, "http://www.example.com")
            .push(OAUTH_NONCE, "N")
            .push(OAUTH_TIMESTAMP, 1);
        let request = RequestSigner::new(&consumer)
            .sign(
                HttpMethod::Get,
                "https://www.flickr.com/services/oauth/request_token",
                params,
            )
            .unwrap();

        let base = "GET&https%3A%2F%2Fwww.flickr.com%2Fservices%2Foauth%2Frequest_token&\
                    oauth_callback%3Dhttp%253A%252F%252Fwww.example.com\
                    %26oauth_consumer_key%3DK%26oauth_nonce%3DN\
                    %26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1\
                    %26oauth_version%3D1.0";
        let mut unsigned = request.params.clone();
        unsigned.remove(OAUTH_SIGNATURE);
        assert_eq!(
            signature_base_string(request.method, &request.url, &unsigned).unwrap(),
            base
        );

        // HMAC-SHA1 of `base` under key "S&", computed independently
        assert_eq!(
            request.params.get(OAUTH_SIGNATURE),
            Some("fXqfRW32OA0+Ibd9s1dtFjXqZA4=")
        );
        assert!(!request.params.contains(OAUTH_TOKEN));
    }

    #[tokio::test]
    async fn request_token_step() {
        let (client, transport) = helpers::fake_client();
        transport.respond(
            "oauth_callback_confirmed=true&oauth_token=72157626737672178-022bbd2f4c2f3432\
             &oauth_token_secret=fccb68c4e6103197",
        );

        let token = client.oauth().request_token(OUT_OF_BAND).await.unwrap();
        assert_eq!(token, request_token());

        let sent = transport.last_request();
        assert_eq!(sent.method, HttpMethod::Get);
        assert_eq!(sent.url, "https://www.flickr.com/services/oauth/request_token");
        assert_eq!(sent.params.get(OAUTH_CALLBACK), Some("oob"));
        assert!(!sent.params.contains(OAUTH_TOKEN));
        verify_signature(&sent, None);
    }

    #[tokio::test]
    async fn unconfirmed_callback_is_rejected() {
        let (client, transport) = helpers::fake_client();
        transport.respond("oauth_callback_confirmed=false&oauth_token=a&oauth_token_secret=b");

        let result = client.oauth().request_token("https://example.com/cb").await;
        assert!(matches!(result, Err(FlickrError::CallbackNotConfirmed())));
    }

    #[tokio::test]
    async fn missing_callback_confirmation_is_rejected() {
        let (client, transport) = helpers::fake_client();
        transport.respond(
            "oauth_token=72157626737672178-022bbd2f4c2f3432&oauth_token_secret=fccb68c4e6103197",
        );

        let result = client.oauth().request_token(OUT_OF_BAND).await;
        assert!(matches!(result, Err(FlickrError::CallbackNotConfirmed())));
    }

    #[tokio::test]
    async fn rejected_status_with_problem_body_is_oauth_problem() {
        let (client, transport) = helpers::fake_client();
        transport.fail(401, "oauth_problem=signature_invalid");
        transport.fail(401, "oauth_problem=token_rejected");

        let result = client.oauth().request_token(OUT_OF_BAND).await;
        assert!(matches!(result, Err(FlickrError::OAuthProblem(p)) if p == "signature_invalid"));

        let result = client.oauth().access_token(&request_token(), "v").await;
        assert!(matches!(result, Err(FlickrError::OAuthProblem(p)) if p == "token_rejected"));
    }

    #[tokio::test]
    async fn other_http_failures_pass_through() {
        let (client, transport) = helpers::fake_client();
        transport.fail(503, "Service Unavailable");

        let result = client.oauth().request_token(OUT_OF_BAND).await;
        assert!(matches!(result, Err(FlickrError::HttpStatus(503, _))));
    }

    #[tokio::test]
    async fn provider_problem_is_reported() {
        let (client, transport) = helpers::fake_client();
        transport.respond("oauth_problem=signature_invalid");

        let result = client.oauth().request_token(OUT_OF_BAND).await;
        assert!(matches!(result, Err(FlickrError::OAuthProblem(p)) if p == "signature_invalid"));
    }

    #[tokio::test]
    async fn empty_body_is_an_error() {
        let (client, transport) = helpers::fake_client();
        transport.respond("");

        let result = client.oauth().access_token(&request_token(), "v").await;
        assert!(matches!(result, Err(FlickrError::ResponseMissing())));
    }

    #[test]
    fn authorization_url_carries_token_and_perms() {
        let (client, _) = helpers::fake_client();
        let url = client
            .oauth()
            .authorization_url(&request_token(), Perms::Write)
            .unwrap();
        assert_eq!(
            url,
            "https://www.flickr.com/services/oauth/authorize\
             ?oauth_token=72157626737672178-022bbd2f4c2f3432&perms=write"
        );
    }

    #[tokio::test]
    async fn access_token_step() {
        let (client, transport) = helpers::fake_client();
        transport.respond(
            "fullname=Jamal%20Fanaian&oauth_token=72157626318069415-087bfc7b5816092c\
             &oauth_token_secret=a202d1f853ec69de&user_nsid=21207597%40N07&username=jamalfanaian",
        );

        let identity = client
            .oauth()
            .access_token(&request_token(), "5d1b96a26b494074")
            .await
            .unwrap();
        assert_eq!(identity.token, helpers::access_token());
        assert_eq!(identity.user_id, "21207597@N07");
        assert_eq!(identity.username, "jamalfanaian");
        assert_eq!(identity.real_name, "Jamal Fanaian");

        let sent = transport.last_request();
        assert_eq!(sent.url, "https://www.flickr.com/services/oauth/access_token");
        assert_eq!(
            sent.params.get(OAUTH_TOKEN),
            Some("72157626737672178-022bbd2f4c2f3432")
        );
        assert_eq!(sent.params.get(OAUTH_VERIFIER), Some("5d1b96a26b494074"));
        verify_signature(&sent, Some("fccb68c4e6103197"));
    }

    #[tokio::test]
    async fn access_token_without_username_fails() {
        let (client, transport) = helpers::fake_client();
        transport.respond("oauth_token=t&oauth_token_secret=s&user_nsid=1%40N07");

        let result = client.oauth().access_token(&request_token(), "v").await;
        assert!(matches!(result, Err(FlickrError::MissingField(f)) if f == "username"));
    }

    #[tokio::test]
    async fn check_token_reports_perms() {
        let (client, transport) = helpers::fake_client();
        transport.respond(
            r#"{"oauth":{"token":{"_content":"72157626318069415-087bfc7b5816092c"},
                "perms":{"_content":"write"},
                "user":{"nsid":"21207597@N07","username":"jamalfanaian","fullname":"Jamal Fanaian"}},
               "stat":"ok"}"#,
        );

        let token = helpers::access_token();
        let check = client.oauth().check_token(&token).await.unwrap();
        assert_eq!(check.perms, Perms::Write);
        assert_eq!(check.user.nsid, "21207597@N07");

        let sent = transport.last_request();
        assert_eq!(sent.params.get("method"), Some("flickr.auth.oauth.checkToken"));
        assert_eq!(sent.params.get(OAUTH_TOKEN), Some(token.token.as_str()));
        verify_signature(&sent, Some(&token.token_secret));
    }

    #[tokio::test]
    async fn upload_signature_ignores_photo_bytes() {
        let (client, transport) = helpers::fake_client();
        transport.respond(r#"<rsp stat="ok"><photoid>52345</photoid></rsp>"#);
        transport.respond(r#"<rsp stat="ok"><photoid>52346</photoid></rsp>"#);

        let token = helpers::access_token();
        let uploader = client.session(Some(&token)).upload();
        let meta = UploadMetadata {
            title: Some("Harbour at dusk".into()),
            ..Default::default()
        };
        let first = uploader
            .upload(UploadFile::new(vec![0xff_u8, 0xd8, 0xff], "a.jpg", "image/jpeg"), &meta)
            .await
            .unwrap();
        let second = uploader
            .upload(UploadFile::new(vec![0_u8; 64], "b.jpg", "image/jpeg"), &meta)
            .await
            .unwrap();
        assert_eq!((first.as_str(), second.as_str()), ("52345", "52346"));

        for sent in transport.requests() {
            assert_eq!(sent.method, HttpMethod::Post);
            assert_eq!(sent.url, "https://up.flickr.com/services/upload/");
            assert!(sent.params.has_binary());
            assert!(!sent.params.contains("format"));
            verify_signature(&sent, Some(&token.token_secret));

            let mut text_only = Params::new();
            for (k, v) in sent.params.text_pairs() {
                text_only.push(k, v);
            }
            assert_eq!(
                signature_base_string(sent.method, &sent.url, &sent.params).unwrap(),
                signature_base_string(sent.method, &sent.url, &text_only).unwrap()
            );
        }
    }

    #[tokio::test]
    async fn upload_needs_a_token() {
        let (client, transport) = helpers::fake_client();
        let result = client
            .session(None)
            .upload()
            .upload(UploadFile::new(vec![1_u8], "a.jpg", "image/jpeg"), &UploadMetadata::default())
            .await;
        assert!(matches!(result, Err(FlickrError::MissingConfig("access token"))));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn consumer_key_is_sent_as_given() {
        let consumer = ConsumerCreds::new(CONSUMER_KEY, CONSUMER_SECRET).unwrap();
        let request = RequestSigner::new(&consumer)
            .sign(HttpMethod::Get, "https://api.flickr.com/services/rest/", Params::new())
            .unwrap();
        assert_eq!(request.params.get("oauth_consumer_key"), Some(CONSUMER_KEY));
    }
}
