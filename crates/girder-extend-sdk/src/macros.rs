//! Convenience macros for extension development.

/// Macro for creating an [`ExtensionInfo`] struct.
///
/// # Example
/// ```rust,ignore
/// let info = extension_info!(
///     id: "toml-config",
///     name: "TOML Config",
///     version: "1.0.0",
///     description: "TOML application config backend",
///     author: "Girder"
/// );
/// ```
///
/// [`ExtensionInfo`]: girder_extend::extension::ExtensionInfo
#[macro_export]
macro_rules! extension_info {
    (
        id: $id:expr,
        name: $name:expr,
        version: $version:expr,
        description: $desc:expr,
        author: $author:expr
    ) => {
        $crate::prelude::ExtensionInfo {
            id: $id.to_string(),
            name: $name.to_string(),
            version: $version.to_string(),
            description: $desc.to_string(),
            author: $author.to_string(),
        }
    };
}

/// Macro for quickly building a [`HookContext`].
///
/// # Example
/// ```rust,ignore
/// let ctx = hook_ctx!(points::POST_RUN, {
///     "command" => json!("greet"),
///     "exit_code" => json!(0),
/// });
/// ```
///
/// [`HookContext`]: girder_extend::hooks::context::HookContext
#[macro_export]
macro_rules! hook_ctx {
    ($point:expr) => {
        $crate::prelude::HookContext::new($point)
    };
    ($point:expr, { $($key:expr => $value:expr),* $(,)? }) => {{
        let mut ctx = $crate::prelude::HookContext::new($point);
        $(
            ctx.data.insert($key.to_string(), $value);
        )*
        ctx
    }};
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    #[test]
    fn extension_info_macro_fills_all_fields() {
        let info = extension_info!(
            id: "demo",
            name: "Demo",
            version: "0.1.0",
            description: "a demo extension",
            author: "tests"
        );
        assert_eq!(info.id, "demo");
        assert_eq!(info.version, "0.1.0");
    }

    #[test]
    fn hook_ctx_macro_seeds_data() {
        let ctx = hook_ctx!("post_run", {
            "command" => json!("greet"),
            "exit_code" => json!(0),
        });
        assert_eq!(ctx.point, "post_run");
        assert_eq!(ctx.get_str("command"), Some("greet"));
        assert_eq!(ctx.get_i64("exit_code"), Some(0));
    }
}
