//! Route-method resource builder
//!
//! Builds one `AWS::ApiGateway::Method` definition per HTTP event: the
//! front-door verb and authorization settings, plus a fixed proxy integration
//! toward the backing function. The integration verb is always `POST`
//! regardless of the declared front-end verb; invoking a function backend is
//! uniform no matter how the front door was hit.

use serde_json::{Value, json};

use crate::error::Result;
use crate::event::HttpEvent;
use crate::ids;
use crate::templates::DEFAULT_JSON_REQUEST_TEMPLATE;

/// Build the method resource for `event`, returning its logical id and
/// definition.
///
/// `route_logical_id` is the externally supplied route-resource id for the
/// event's path; its trailing index becomes the method id suffix.
pub fn build_method(
    function_name: &str,
    event: &HttpEvent,
    route_logical_id: &str,
) -> Result<(String, Value)> {
    let logical_id = ids::method_logical_id(&event.method, route_logical_id)?;

    let mut resource = json!({
        "Type": "AWS::ApiGateway::Method",
        "Properties": {
            "AuthorizationType": "NONE",
            "HttpMethod": event.method.to_uppercase(),
            "MethodResponses": [
                {
                    "ResponseModels": {},
                    "ResponseParameters": {},
                    "StatusCode": "200"
                }
            ],
            "RequestParameters": {},
            "Integration": {
                "IntegrationHttpMethod": "POST",
                "Type": "AWS",
                "Uri": {
                    "Fn::Join": ["",
                        [
                            "arn:aws:apigateway:",
                            {"Ref": "AWS::Region"},
                            ":lambda:path/2015-03-31/functions/",
                            {"Fn::GetAtt": [function_name, "Arn"]},
                            "/invocations"
                        ]
                    ]
                },
                "RequestTemplates": {
                    "application/json": DEFAULT_JSON_REQUEST_TEMPLATE
                },
                "IntegrationResponses": [
                    {
                        "StatusCode": "200",
                        "ResponseParameters": {},
                        "ResponseTemplates": {
                            "application/json": ""
                        }
                    }
                ]
            },
            "ResourceId": {"Ref": route_logical_id},
            "RestApiId": {"Ref": "RestApiApigEvent"}
        }
    });

    if let Some(name) = event.authorizer.as_ref().and_then(|a| a.resolve_name()) {
        let authorizer_id = ids::authorizer_logical_id(&name);
        resource["Properties"]["AuthorizationType"] = json!("CUSTOM");
        resource["Properties"]["AuthorizerId"] = json!({"Ref": authorizer_id.clone()});
        // The method must not be created before its authorizer exists.
        resource["DependsOn"] = json!(authorizer_id);
    } else if event.authorizer.is_some() {
        tracing::warn!(
            "authorizer declared on {} {} is unusable (no arn or name); compiling without authorization",
            event.method,
            event.path
        );
    }

    if event.private {
        resource["Properties"]["ApiKeyRequired"] = json!(true);
    }

    Ok((logical_id, resource))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authorizer::AuthorizerRef;

    fn event(method: &str, path: &str) -> HttpEvent {
        HttpEvent {
            method: method.to_string(),
            path: path.to_string(),
            authorizer: None,
            private: false,
        }
    }

    #[test]
    fn test_basic_method_resource() {
        let (id, resource) =
            build_method("first", &event("post", "users/create"), "ResourceApigEvent5").unwrap();

        assert_eq!(id, "PostMethodApigEvent5");
        assert_eq!(resource["Type"], "AWS::ApiGateway::Method");
        assert_eq!(resource["Properties"]["HttpMethod"], "POST");
        assert_eq!(resource["Properties"]["AuthorizationType"], "NONE");
        assert_eq!(
            resource["Properties"]["ResourceId"]["Ref"],
            "ResourceApigEvent5"
        );
        assert_eq!(
            resource["Properties"]["RestApiId"]["Ref"],
            "RestApiApigEvent"
        );
        assert!(resource.get("DependsOn").is_none());
        assert!(resource["Properties"].get("ApiKeyRequired").is_none());
    }

    #[test]
    fn test_integration_always_posts_to_backend() {
        let (_, resource) =
            build_method("first", &event("GET", "users/list"), "ResourceApigEvent0").unwrap();

        let integration = &resource["Properties"]["Integration"];
        assert_eq!(integration["IntegrationHttpMethod"], "POST");
        assert_eq!(integration["Type"], "AWS");

        let join = integration["Uri"]["Fn::Join"][1].as_array().unwrap();
        assert_eq!(join[3]["Fn::GetAtt"][0], "first");
        assert_eq!(join[4], "/invocations");
    }

    #[test]
    fn test_request_template_is_embedded_verbatim() {
        let (_, resource) =
            build_method("first", &event("GET", "users/list"), "ResourceApigEvent0").unwrap();

        assert_eq!(
            resource["Properties"]["Integration"]["RequestTemplates"]["application/json"],
            DEFAULT_JSON_REQUEST_TEMPLATE
        );
    }

    #[test]
    fn test_authorizer_wiring() {
        let mut authorized = event("post", "users/create");
        authorized.authorizer = Some(AuthorizerRef::Name("CustomAuth".to_string()));

        let (_, resource) = build_method("first", &authorized, "ResourceApigEvent1").unwrap();
        assert_eq!(resource["Properties"]["AuthorizationType"], "CUSTOM");
        assert_eq!(
            resource["Properties"]["AuthorizerId"]["Ref"],
            "CustomAuthAuthorizer"
        );
        assert_eq!(resource["DependsOn"], "CustomAuthAuthorizer");
    }

    #[test]
    fn test_unusable_authorizer_compiles_unauthenticated() {
        let mut declared = event("post", "users/create");
        declared.authorizer = Some(AuthorizerRef::ObjectRef {
            arn: None,
            name: None,
        });

        let (_, resource) = build_method("first", &declared, "ResourceApigEvent1").unwrap();
        assert_eq!(resource["Properties"]["AuthorizationType"], "NONE");
        assert!(resource["Properties"].get("AuthorizerId").is_none());
        assert!(resource.get("DependsOn").is_none());
    }

    #[test]
    fn test_private_sets_api_key_required() {
        let mut private = event("post", "users/create");
        private.private = true;

        let (_, resource) = build_method("first", &private, "ResourceApigEvent1").unwrap();
        assert_eq!(resource["Properties"]["ApiKeyRequired"], true);
        // Independent of authorization.
        assert_eq!(resource["Properties"]["AuthorizationType"], "NONE");
    }

    #[test]
    fn test_malformed_route_id_fails() {
        let result = build_method("first", &event("post", "users/create"), "ResourceApigEvent");
        assert!(result.is_err());
    }
}
