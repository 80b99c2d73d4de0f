// ---------------------------------------------------------------------------
// Macro for endpoint declarations.
// Generates: the marker type and its Endpoint impl with a static spec, the
// descriptor alias, optional marker-trait impls, and one setter per route
// segment, flag, value parameter and list parameter. Endpoints declared with
// `body: true` also get a `body` setter.
//
// Flags get two setters: `name()` stores `true`, `set_name(v)` stores `v` or
// removes the key for `None`.
// ---------------------------------------------------------------------------
macro_rules! endpoint {
    (@body true, $marker:ident) => {
        impl $crate::descriptor::Descriptor<$marker> {
            /// Attaches the request body.
            pub fn body(self, body: impl Into<::request::Body>) -> Self {
                self.with_body(body.into())
            }
        }
    };
    (@body false, $marker:ident) => {};
    (
        $(#[$attr:meta])*
        $marker:ident => $alias:ident {
            name: $name:literal,
            method: $method:ident,
            paths: [$($path:literal),+ $(,)?],
            body: $body:tt,
            $( marks: [$($mark:path),* $(,)?], )?
            $( route { $($rsetter:ident : $rty:ty => $rkey:literal),* $(,)? } )?
            $( flags { $($flag:ident / $set_flag:ident => $fkey:literal),* $(,)? } )?
            $( values { $($value:ident : $vty:ty => $vkey:literal),* $(,)? } )?
            $( lists { $($list:ident => $lkey:literal),* $(,)? } )?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $marker;

        impl ::request::Endpoint for $marker {
            fn spec() -> &'static ::request::EndpointSpec {
                static SPEC: ::request::EndpointSpec = ::request::EndpointSpec::new(
                    $name,
                    ::request::HttpMethod::$method,
                    &[$($path),+],
                    $body,
                );
                &SPEC
            }
        }

        #[doc = concat!("Request descriptor for `", $name, "`.")]
        pub type $alias = $crate::descriptor::Descriptor<$marker>;

        $($( impl $mark for $marker {} )*)?

        endpoint!(@body $body, $marker);

        impl $crate::descriptor::Descriptor<$marker> {
            $($(
                #[doc = concat!("Binds the `", $rkey, "` route segment.")]
                pub fn $rsetter(self, value: impl Into<$rty>) -> Self {
                    let value: $rty = value.into();
                    self.bind($rkey, value)
                }
            )*)?

            $($(
                #[doc = concat!("Sets `", $fkey, "=true`.")]
                pub fn $flag(self) -> Self {
                    self.query($fkey, true)
                }

                #[doc = concat!("Sets `", $fkey, "`, or removes it for `None`.")]
                pub fn $set_flag(self, value: impl Into<Option<bool>>) -> Self {
                    self.query_opt::<bool>($fkey, value.into())
                }
            )*)?

            $($(
                #[doc = concat!("Sets the `", $vkey, "` query parameter.")]
                pub fn $value(self, value: impl Into<$vty>) -> Self {
                    let value: $vty = value.into();
                    self.query($vkey, value)
                }
            )*)?

            $($(
                #[doc = concat!("Sets the `", $lkey, "` query parameter, comma-joined.")]
                pub fn $list<I, S>(self, values: I) -> Self
                where
                    I: IntoIterator<Item = S>,
                    S: Into<String>,
                {
                    self.query($lkey, values.into_iter().map(Into::into).collect::<Vec<String>>())
                }
            )*)?
        }
    };
}

// ---------------------------------------------------------------------------
// Macro for namespace call wrappers.
// For every entry generates four methods:
//   $method(args.., selector)                      sync, seeded + customised
//   $method_async(args.., selector, cancel)        async, seeded + customised
//   $request(request)                              sync, prebuilt
//   $request_async(request, cancel)                async, prebuilt
// The seeded forms build the default descriptor from `$seed`, pass it through
// the selector and delegate to the prebuilt forms. The enclosing type must
// provide `fn dispatch(&self) -> &Dispatch`.
// ---------------------------------------------------------------------------
macro_rules! namespace_methods {
    (
        $(
            $(#[$attr:meta])*
            $method:ident, $method_async:ident, $request:ident, $request_async:ident
            ( $($arg:ident : $argty:ty),* $(,)? ) -> $desc:ty = $seed:expr;
        )+
    ) => {
        $(
            $(#[$attr])*
            ///
            /// The selector receives the default request and returns the one to
            /// send; pass `std::convert::identity` to keep the defaults.
            pub fn $method<F>(
                &self,
                $($arg: $argty,)*
                selector: F,
            ) -> Result<::request::Response, ::request::ClientError>
            where
                F: FnOnce($desc) -> $desc,
            {
                self.$request(selector($seed))
            }

            $(#[$attr])*
            ///
            /// Asynchronous form. A `None` token means the call cannot be
            /// cancelled by the caller.
            pub async fn $method_async<F>(
                &self,
                $($arg: $argty,)*
                selector: F,
                cancel: Option<::tokio_util::sync::CancellationToken>,
            ) -> Result<::request::Response, ::request::ClientError>
            where
                F: FnOnce($desc) -> $desc,
            {
                let request = selector($seed);
                self.$request_async(request, cancel).await
            }

            $(#[$attr])*
            ///
            /// Sends a prebuilt request.
            pub fn $request(
                &self,
                request: $desc,
            ) -> Result<::request::Response, ::request::ClientError> {
                self.dispatch().send(&request)
            }

            $(#[$attr])*
            ///
            /// Sends a prebuilt request asynchronously.
            pub async fn $request_async(
                &self,
                request: $desc,
                cancel: Option<::tokio_util::sync::CancellationToken>,
            ) -> Result<::request::Response, ::request::ClientError> {
                self.dispatch().send_async(&request, cancel).await
            }
        )+
    };
}
