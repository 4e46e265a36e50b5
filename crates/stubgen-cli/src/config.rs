//! Generator configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// What counts as first-party code in the scanned application.
///
/// Defaults describe a stock WHMCS installation; a JSON config file can
/// override any field individually.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Namespace prefix identifying first-party classes
    pub namespace_prefix: String,

    /// Vendored-dependency directory, relative to the application root
    pub vendor_dir: String,

    /// Vendored subtree that still counts as first-party
    pub first_party_vendor: String,

    /// Files excluded from scanning entirely, relative to the application root
    pub skip_files: Vec<String>,

    /// Function names emitted regardless of where they are defined
    pub function_allow_list: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace_prefix: "WHMCS\\".to_string(),
            vendor_dir: "vendor".to_string(),
            first_party_vendor: "vendor/whmcs".to_string(),
            skip_files: vec!["vendor/whmcs/whmcs-foundation/lib/Mobile.php".to_string()],
            function_allow_list: default_function_allow_list(),
        }
    }
}

impl GeneratorConfig {
    /// Load a configuration from a JSON file. Missing fields fall back to the
    /// WHMCS defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| Error::Io(path.to_path_buf(), e))?;
        serde_json::from_str(&raw).map_err(|e| Error::Config(path.to_path_buf(), e.to_string()))
    }

    /// Whether a function with this name is always emitted.
    pub fn is_function_allow_listed(&self, name: &str) -> bool {
        self.function_allow_list.iter().any(|n| n == name)
    }

    /// Whether a fully-qualified container name counts as first-party.
    pub fn is_first_party_container(&self, fqn: &str) -> bool {
        fqn.starts_with(&self.namespace_prefix)
    }
}

/// Function names known to be defined by WHMCS itself even though they live
/// in files the vendored-path filter would otherwise reject.
fn default_function_allow_list() -> Vec<String> {
    [
        "sendMessage",
        "sendAdminNotification",
        "sendAdminNotificationNow",
        "sendAdminMessage",
        "toMySQLDate",
        "validateDateInput",
        "fromMySQLDate",
        "MySQL2Timestamp",
        "getTodaysDate",
        "xdecrypt",
        "AffiliatePayment",
        "calculateAffiliateCommission",
        "logActivity",
        "addToDoItem",
        "generateUniqueID",
        "foreignChrReplace",
        "foreignChrReplace2",
        "getModRewriteFriendlyString",
        "sanitize",
        "ParseXmlToArray",
        "XMLtoARRAY",
        "format_as_currency",
        "encrypt",
        "_hash",
        "_generate_iv",
        "getUsersLang",
        "swapLang",
        "getCurrency",
        "formatCurrency",
        "currencyDataCache",
        "convertCurrency",
        "getClientGroups",
        "curlCall",
        "get_token",
        "set_token",
        "conditionally_set_token",
        "generate_token",
        "check_token",
        "localAPI_Legacy",
        "localAPI",
        "redir",
        "redirSystemURL",
        "logModuleCall",
        "updateService",
        "autoHyperLink",
        "isValidforPath",
        "generateNewCaptchaCode",
        "escapeJSSingleQuotes",
        "recursiveReplace",
        "ensurePaymentMethodIsSet",
        "_safe_serialize",
        "safe_serialize",
        "upperCaseFirstLetter",
        "saveSingleCustomField",
        "saveSingleCustomFieldByNameAndType",
        "jsonPrettyPrint",
        "defineGatewayField",
        "defineGatewayFieldStorage",
        "generateFriendlyPassword",
        "build_query_string",
        "routePathWithQuery",
        "routePath",
        "fqdnRoutePath",
        "prependSystemUrlToRoutePath",
        "requestedRoutableQueryUriPath",
        "view",
        "moduleView",
        "class_uses_deep",
        "traitOf",
        "escape",
        "stringLiteralToBool",
        "valueIsZero",
        "arrayTrim",
        "removeEmptyValues",
        "ucoalesce",
        "coalesce",
        "ecoalesce",
        "scoalesce",
        "preparePromotionDataForSelection",
        "get_flash_message",
        "getLastInput",
        "clearLastInput",
        "run_hook",
        "run_validate_hook",
        "convertIniSize",
        "getUploadMaxFileSize",
        "getIniSettingSizeUnit",
        "getIniSettingSize",
        "convertBytesToUnit",
        "hasMaskedPasswordChanged",
        "interpretMaskedPasswordChangeForStorage",
        "htmlspecialchars_array",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
