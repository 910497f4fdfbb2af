//! The WebView feature declarations.
//!
//! Every flag the embedding layer owns is declared here as a static, then
//! listed in [`DECLARED_FEATURES`] so the table can index it by name. Names
//! are stable wire identifiers targeted by remote experiment configuration;
//! never rename one once it has shipped without a migration plan.

use crate::feature::Feature;
use crate::param::{FeatureParam, ParamEntry};

// Keep roughly alphabetical on flag name.

/// Kill switch for Profile.addQuicHints.
pub static WEBVIEW_ADD_QUIC_HINTS: Feature = Feature::enabled("WebViewAddQuicHints");

/// Auto-grant storage access API requests when a relationship is detected
/// between the app and the website.
pub static WEBVIEW_AUTO_SAA: Feature = Feature::disabled("WebViewAutoSAA");

/// Back/forward cache support. Only takes effect together with the
/// content-side back/forward cache flag.
pub static WEBVIEW_BACK_FORWARD_CACHE: Feature = Feature::disabled("WebViewBackForwardCache");

/// Lets apps configure the renderer library prefetching behaviour.
pub static WEBVIEW_CONFIGURABLE_LIBRARY_PREFETCH: Feature =
    Feature::enabled("WebViewConfigurableLibraryPrefetch");

/// Load include statements when checking digital asset links.
pub static WEBVIEW_DIGITAL_ASSET_LINKS_LOAD_INCLUDES: Feature =
    Feature::disabled("WebViewDigitalAssetLinksLoadIncludes");

/// Disables partitioned cookies by default. Apps can still opt back in
/// through the setPartitionedCookiesEnabled API.
pub static WEBVIEW_DISABLE_CHIPS: Feature = Feature::disabled("WebViewDisableCHIPS");

/// Drain the prefetch queue (for prefetches triggered from a background
/// thread) during instance initialization, before the first loadUrl.
pub static WEBVIEW_DRAIN_PREFETCH_QUEUE_DURING_INIT: Feature =
    Feature::enabled("WebViewDrainPrefetchQueueDuringInit");

/// JS FileSystemAccess API. Set by internal code from the app's target SDK
/// version; the declared default is not expected to be changed by hand.
pub static WEBVIEW_FILE_SYSTEM_ACCESS: Feature = Feature::disabled("WebViewFileSystemAccess");

/// Ignore duplicate navigations. Only takes effect together with the
/// content-side duplicate-navigation flag.
pub static WEBVIEW_IGNORE_DUPLICATE_NAVS: Feature =
    Feature::disabled("WebViewIgnoreDuplicateNavs");

/// Fetch the handwriting icon lazily.
pub static WEBVIEW_LAZY_FETCH_HAND_WRITING_ICON: Feature =
    Feature::enabled("WebViewLazyFetchHandWritingIcon");

/// Autoupgrade passive mixed content (audio/video/image subresources loaded
/// over HTTP on HTTPS sites) to HTTPS, blocking the load if the upgrade
/// fails. Only affects apps in mixed-content compatibility mode.
pub static WEBVIEW_MIXED_CONTENT_AUTOUPGRADES: Feature =
    Feature::disabled("WebViewMixedContentAutoupgrades");

/// Allow muting WebView audio through an API.
pub static WEBVIEW_MUTE_AUDIO: Feature = Feature::enabled("WebViewMuteAudio");

/// Used by variations tests, never in production. Intentionally kept around
/// even though it is stale.
pub static WEBVIEW_TEST_FEATURE: Feature = Feature::disabled("WebViewTestFeature");

/// Upload UMA metrics through the nonembedded metrics upload service instead
/// of sending them directly to the platform service.
pub static WEBVIEW_USE_METRICS_UPLOAD_SERVICE: Feature =
    Feature::disabled("WebViewUseMetricsUploadService");

/// Same as `WEBVIEW_USE_METRICS_UPLOAD_SERVICE`, but only when running
/// inside the SDK Runtime.
pub static WEBVIEW_USE_METRICS_UPLOAD_SERVICE_ONLY_SDK_RUNTIME: Feature =
    Feature::disabled("WebViewUseMetricsUploadServiceOnlySdkRuntime");

/// Propagate the platform's network change notifications (connected,
/// disconnected, made default, soon to disconnect) to the networking stack.
/// Also gates whether network handles are reported as supported.
///
/// Carries its legacy lowercase name for experiment-targeting compatibility.
pub static WEBVIEW_PROPAGATE_NETWORK_CHANGE_SIGNALS: Feature =
    Feature::enabled("WebViewPropagateNetworkChangeSignals")
        .with_display_name("webViewPropagateNetworkChangeSignals");

/// Report the unreduced product version from the browser client API,
/// regardless of the user-agent reduction policy.
pub static WEBVIEW_UNREDUCED_PRODUCT_VERSION: Feature =
    Feature::enabled("WebViewUnreducedProductVersion");

/// Invoke the zoom picker on every consumed scroll-update ack instead of
/// showing it persistently from scroll start to scroll end.
pub static WEBVIEW_INVOKE_ZOOM_PICKER_ON_GSU: Feature =
    Feature::disabled("WebViewInvokeZoomPickerOnGSU");

/// Skip shouldInterceptRequest and related checks for prefetch requests.
pub static WEBVIEW_SKIP_INTERCEPTS_FOR_PREFETCH: Feature =
    Feature::enabled("WebViewSkipInterceptsForPrefetch");

/// Use the initial network state during initialization to speed up startup.
pub static WEBVIEW_USE_INITIAL_NETWORK_STATE_AT_STARTUP: Feature =
    Feature::enabled("WebViewUseInitialNetworkStateAtStartup");

/// Reduce the user-agent's Android version and device model.
pub static WEBVIEW_REDUCE_UA_ANDROID_VERSION_DEVICE_MODEL: Feature =
    Feature::disabled("WebViewReduceUAAndroidVersionDeviceModel");

/// Enables WebView crashes.
pub static WEBVIEW_ENABLE_CRASH: Feature = Feature::disabled("WebViewEnableCrash");

/// Preload expensive classes during startup.
pub static WEBVIEW_PRELOAD_CLASSES: Feature = Feature::enabled("WebViewPreloadClasses");

/// Prefetch the native library into memory during startup.
pub static WEBVIEW_PREFETCH_NATIVE_LIBRARY: Feature =
    Feature::enabled("WebViewPrefetchNativeLibrary");

/// Trigger the native-library prefetch from the renderer instead of the
/// browser.
pub static WEBVIEW_PREFETCH_FROM_RENDERER: FeatureParam<bool> = FeatureParam::new(
    &WEBVIEW_PREFETCH_NATIVE_LIBRARY,
    "WebViewPrefetchFromRenderer",
    true,
);

/// Include system bars in safe-area-inset CSS environment values for
/// WebViews that take up the entire screen.
pub static WEBVIEW_SAFE_AREA_INCLUDES_SYSTEM_BARS: Feature =
    Feature::enabled("WebViewSafeAreaIncludesSystemBars");

/// Send scrolled accessibility events on a 100ms cadence while the user
/// scrolls, rather than on consumed scroll-update acks. Kept as a kill
/// switch in case the old behavior has to come back.
pub static WEBVIEW_DO_NOT_SEND_ACCESSIBILITY_EVENTS_ON_GSU: Feature =
    Feature::enabled("WebViewDoNotSendAccessibilityEventsOnGSU");

/// Hyperlink context menu.
pub static WEBVIEW_HYPERLINK_CONTEXT_MENU: Feature =
    Feature::disabled("WebViewHyperlinkContextMenu");

/// Create a spare renderer when the browser context is created.
pub static CREATE_SPARE_RENDERER_ON_BROWSER_CONTEXT_CREATION: Feature =
    Feature::enabled("CreateSpareRendererOnBrowserContextCreation");

/// Kill switch for WebAuthn usage.
pub static WEBVIEW_WEBAUTHN: Feature = Feature::enabled("WebViewWebauthn");

/// RenderDocument support. Only takes effect together with the content-side
/// RenderDocument flag.
pub static WEBVIEW_RENDER_DOCUMENT: Feature = Feature::disabled("WebViewRenderDocument");

/// Resize the visual viewport from both the visible WebView area and any
/// IME overlap.
pub static WEBVIEW_REPORT_IME_INSETS: Feature = Feature::enabled("WebViewReportImeInsets");

/// When the app has not overridden shouldInterceptRequest, short circuit on
/// the IO thread instead of calling the empty method on a background thread.
pub static WEBVIEW_SHORT_CIRCUIT_SHOULD_INTERCEPT_REQUEST: Feature =
    Feature::disabled("WebViewShortCircuitShouldInterceptRequest");

/// Disable MSAA and mip-map auto sharpening on very large screen devices
/// such as TVs.
pub static WEBVIEW_USE_RENDERING_HEURISTIC: Feature =
    Feature::disabled("WebViewUseRenderingHeuristic");

/// Run chromium initialization through the startup-tasks logic, executing it
/// asynchronously when startup is triggered from a background thread. Also
/// caches a startup exception and rethrows it on retry without a restart.
pub static WEBVIEW_USE_STARTUP_TASKS_LOGIC: Feature =
    Feature::disabled("WebViewUseStartupTasksLogic");

/// Observe WebView movements with a pre-draw listener and re-calculate the
/// visual viewport from those events.
pub static WEBVIEW_USE_VIEW_POSITION_OBSERVER_FOR_INSETS: Feature =
    Feature::enabled("WebViewUseViewPositionObserverForInsets");

/// Record histograms about the app's cache size.
pub static WEBVIEW_RECORD_APP_CACHE_HISTOGRAMS: Feature =
    Feature::disabled("WebViewRecordAppCacheHistograms");

/// Override the default QUIC connection timeout with
/// `WEBVIEW_QUIC_CONNECTION_TIMEOUT_SECONDS`.
pub static WEBVIEW_QUIC_CONNECTION_TIMEOUT: Feature =
    Feature::enabled("WebViewQuicConnectionTimeout");

/// QUIC connection timeout, in seconds.
pub static WEBVIEW_QUIC_CONNECTION_TIMEOUT_SECONDS: FeatureParam<i64> = FeatureParam::new(
    &WEBVIEW_QUIC_CONNECTION_TIMEOUT,
    "WebViewQuicConnectionTimeoutSeconds",
    300,
);

/// Derive the HTTP cache limit from the cache quota the platform allocates
/// to the app, instead of the fixed 20 MiB default. Each code cache gets
/// half the HTTP cache limit.
pub static WEBVIEW_CACHE_SIZE_LIMIT_DERIVED_FROM_APP_CACHE_QUOTA: Feature =
    Feature::disabled("WebViewCacheSizeLimitDerivedFromAppCacheQuota");

/// Multiplier applied to the cache quota to compute the HTTP cache limit.
pub static WEBVIEW_CACHE_SIZE_LIMIT_MULTIPLIER: FeatureParam<f64> = FeatureParam::new(
    &WEBVIEW_CACHE_SIZE_LIMIT_DERIVED_FROM_APP_CACHE_QUOTA,
    "WebViewCacheSizeLimitMultiplier",
    0.5,
);

/// Minimum HTTP cache size limit.
pub static WEBVIEW_CACHE_SIZE_LIMIT_MINIMUM: FeatureParam<i64> = FeatureParam::new(
    &WEBVIEW_CACHE_SIZE_LIMIT_DERIVED_FROM_APP_CACHE_QUOTA,
    "WebViewCacheSizeLimitMinimum",
    20 * 1024 * 1024,
);

/// Maximum HTTP cache size limit.
pub static WEBVIEW_CACHE_SIZE_LIMIT_MAXIMUM: FeatureParam<i64> = FeatureParam::new(
    &WEBVIEW_CACHE_SIZE_LIMIT_DERIVED_FROM_APP_CACHE_QUOTA,
    "WebViewCacheSizeLimitMaximum",
    320 * 1024 * 1024,
);

/// The code cache limit is this multiplier times the HTTP cache limit.
pub static WEBVIEW_CODE_CACHE_SIZE_LIMIT_MULTIPLIER: FeatureParam<f64> = FeatureParam::new(
    &WEBVIEW_CACHE_SIZE_LIMIT_DERIVED_FROM_APP_CACHE_QUOTA,
    "WebViewCodeCacheSizeLimitMultiplier",
    0.5,
);

/// Connect to the nonembedded components provider from a background thread.
pub static WEBVIEW_CONNECT_TO_COMPONENT_PROVIDER_IN_BACKGROUND: Feature =
    Feature::enabled("WebViewConnectToComponentProviderInBackground");

/// Phase 2 of the startup-tasks logic: start the browser process
/// asynchronously when WebView itself is started asynchronously.
pub static WEBVIEW_USE_STARTUP_TASKS_LOGIC_P2: Feature =
    Feature::disabled("WebViewUseStartupTasksLogicP2");

/// Run native startup tasks asynchronously when WebView startup is
/// asynchronous.
pub static WEBVIEW_STARTUP_TASKS_YIELD_TO_NATIVE: Feature =
    Feature::disabled("WebViewStartupTasksYieldToNative");

/// Run metric logging on a separate thread and block until the results are
/// retrieved, instead of initiating it on the main thread and reporting
/// success immediately.
pub static ANDROID_METRICS_ASYNC_METRIC_LOGGING: Feature =
    Feature::disabled("AndroidMetricsAsyncMetricLogging");

/// Reduce when the app's copy of the experiment seed expires, making the
/// client more aggressive about requesting a fresh one.
pub static WEBVIEW_REDUCED_SEED_EXPIRATION: Feature =
    Feature::disabled("WebViewReducedSeedExpiration");

/// Reduce the minimum wait before a new experiment seed may be requested.
/// Pairs with `WEBVIEW_REDUCED_SEED_EXPIRATION`.
pub static WEBVIEW_REDUCED_SEED_REQUEST_PERIOD: Feature =
    Feature::disabled("WebViewReducedSeedRequestPeriod");

/// Early Java startup tracing: collect timing unconditionally and queue the
/// trace events until the tracing backend is initialized. Native tracing is
/// unaffected.
pub static WEBVIEW_EARLY_STARTUP_TRACING: Feature =
    Feature::disabled("WebViewEarlyStartupTracing");

/// Initialize the tracing backend as soon as the native library is loaded.
pub static WEBVIEW_EARLY_PERFETTO_INIT: Feature = Feature::disabled("WebViewEarlyPerfettoInit");

/// Cache reflective AndroidX methods instead of looking them up every call.
pub static WEBVIEW_CACHE_BOUNDARY_INTERFACE_METHODS: Feature =
    Feature::disabled("WebViewCacheBoundaryInterfaceMethods");

/// Opt in to the platform's bindService optimizations.
pub static WEBVIEW_OPT_IN_TO_GMS_BIND_SERVICE_OPTIMIZATION: Feature =
    Feature::disabled("WebViewOptInToGmsBindServiceOptimization");

/// Move some startChromium work to provider initialization, ahead of time.
pub static WEBVIEW_MOVE_WORK_TO_PROVIDER_INIT: Feature =
    Feature::disabled("WebViewMoveWorkToProviderInit");

/// Bypass the provisional cookie manager used before startup; getting the
/// cookie manager instead triggers startup on the main looper and waits.
pub static WEBVIEW_BYPASS_PROVISIONAL_COOKIE_MANAGER: Feature =
    Feature::disabled("WebViewBypassProvisionalCookieManager");

/// Every flag the table indexes. A declaration missing from this list is
/// invisible to lookups.
pub(crate) static DECLARED_FEATURES: &[&Feature] = &[
    &WEBVIEW_ADD_QUIC_HINTS,
    &WEBVIEW_AUTO_SAA,
    &WEBVIEW_BACK_FORWARD_CACHE,
    &WEBVIEW_CONFIGURABLE_LIBRARY_PREFETCH,
    &WEBVIEW_DIGITAL_ASSET_LINKS_LOAD_INCLUDES,
    &WEBVIEW_DISABLE_CHIPS,
    &WEBVIEW_DRAIN_PREFETCH_QUEUE_DURING_INIT,
    &WEBVIEW_FILE_SYSTEM_ACCESS,
    &WEBVIEW_IGNORE_DUPLICATE_NAVS,
    &WEBVIEW_LAZY_FETCH_HAND_WRITING_ICON,
    &WEBVIEW_MIXED_CONTENT_AUTOUPGRADES,
    &WEBVIEW_MUTE_AUDIO,
    &WEBVIEW_TEST_FEATURE,
    &WEBVIEW_USE_METRICS_UPLOAD_SERVICE,
    &WEBVIEW_USE_METRICS_UPLOAD_SERVICE_ONLY_SDK_RUNTIME,
    &WEBVIEW_PROPAGATE_NETWORK_CHANGE_SIGNALS,
    &WEBVIEW_UNREDUCED_PRODUCT_VERSION,
    &WEBVIEW_INVOKE_ZOOM_PICKER_ON_GSU,
    &WEBVIEW_SKIP_INTERCEPTS_FOR_PREFETCH,
    &WEBVIEW_USE_INITIAL_NETWORK_STATE_AT_STARTUP,
    &WEBVIEW_REDUCE_UA_ANDROID_VERSION_DEVICE_MODEL,
    &WEBVIEW_ENABLE_CRASH,
    &WEBVIEW_PRELOAD_CLASSES,
    &WEBVIEW_PREFETCH_NATIVE_LIBRARY,
    &WEBVIEW_SAFE_AREA_INCLUDES_SYSTEM_BARS,
    &WEBVIEW_DO_NOT_SEND_ACCESSIBILITY_EVENTS_ON_GSU,
    &WEBVIEW_HYPERLINK_CONTEXT_MENU,
    &CREATE_SPARE_RENDERER_ON_BROWSER_CONTEXT_CREATION,
    &WEBVIEW_WEBAUTHN,
    &WEBVIEW_RENDER_DOCUMENT,
    &WEBVIEW_REPORT_IME_INSETS,
    &WEBVIEW_SHORT_CIRCUIT_SHOULD_INTERCEPT_REQUEST,
    &WEBVIEW_USE_RENDERING_HEURISTIC,
    &WEBVIEW_USE_STARTUP_TASKS_LOGIC,
    &WEBVIEW_USE_VIEW_POSITION_OBSERVER_FOR_INSETS,
    &WEBVIEW_RECORD_APP_CACHE_HISTOGRAMS,
    &WEBVIEW_QUIC_CONNECTION_TIMEOUT,
    &WEBVIEW_CACHE_SIZE_LIMIT_DERIVED_FROM_APP_CACHE_QUOTA,
    &WEBVIEW_CONNECT_TO_COMPONENT_PROVIDER_IN_BACKGROUND,
    &WEBVIEW_USE_STARTUP_TASKS_LOGIC_P2,
    &WEBVIEW_STARTUP_TASKS_YIELD_TO_NATIVE,
    &ANDROID_METRICS_ASYNC_METRIC_LOGGING,
    &WEBVIEW_REDUCED_SEED_EXPIRATION,
    &WEBVIEW_REDUCED_SEED_REQUEST_PERIOD,
    &WEBVIEW_EARLY_STARTUP_TRACING,
    &WEBVIEW_EARLY_PERFETTO_INIT,
    &WEBVIEW_CACHE_BOUNDARY_INTERFACE_METHODS,
    &WEBVIEW_OPT_IN_TO_GMS_BIND_SERVICE_OPTIMIZATION,
    &WEBVIEW_MOVE_WORK_TO_PROVIDER_INIT,
    &WEBVIEW_BYPASS_PROVISIONAL_COOKIE_MANAGER,
];

pub(crate) fn param_entries() -> Vec<ParamEntry> {
    vec![
        WEBVIEW_PREFETCH_FROM_RENDERER.entry(),
        WEBVIEW_QUIC_CONNECTION_TIMEOUT_SECONDS.entry(),
        WEBVIEW_CACHE_SIZE_LIMIT_MULTIPLIER.entry(),
        WEBVIEW_CACHE_SIZE_LIMIT_MINIMUM.entry(),
        WEBVIEW_CACHE_SIZE_LIMIT_MAXIMUM.entry(),
        WEBVIEW_CODE_CACHE_SIZE_LIMIT_MULTIPLIER.entry(),
    ]
}
