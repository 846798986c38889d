//! Fixed request-mapping template
//!
//! Every compiled method carries the same `application/json` request mapping:
//! a transformation that reshapes the incoming request into a normalized
//! envelope exposing `{body, method, principalId, headers, query, path,
//! identity, stageVariables}` as JSON-safe key/value pairs.
//!
//! The template text is an opaque asset. It is embedded verbatim into each
//! method resource and never parsed or rendered by this crate.

/// The universal `application/json` request mapping template
pub const DEFAULT_JSON_REQUEST_TEMPLATE: &str = r#"
            #define( $loop )
              {
              #foreach($key in $map.keySet())
                  "$util.escapeJavaScript($key)":
                    "$util.escapeJavaScript($map.get($key))"
                    #if( $foreach.hasNext ) , #end
              #end
              }
            #end
            {
              "body": $input.json("$"),
              "method": "$context.httpMethod",
              "principalId": "$context.authorizer.principalId",

              #set( $map = $input.params().header )
              "headers": $loop,

              #set( $map = $input.params().querystring )
              "query": $loop,

              #set( $map = $input.params().path )
              "path": $loop,

              #set( $map = $context.identity )
              "identity": $loop,

              #set( $map = $stageVariables )
              "stageVariables": $loop
            }
          "#;
