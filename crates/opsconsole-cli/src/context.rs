//! Everything one CLI invocation needs, built once from configuration.

use std::sync::Arc;

use tracing::debug;

use opsconsole_client::{
    ActuatorService, AgentService, HttpBackend, LogService, RegionService, ReqwestBackend,
    RoleService, ServerDbService, ServiceService, SessionManager, Transport,
};
use opsconsole_core::config::ConsoleConfig;
use opsconsole_core::result::AppResult;
use opsconsole_core::traits::download::DownloadSink;
use opsconsole_core::traits::storage::KeyValueStore;
use opsconsole_shell::{LayoutStore, Router, StoredSession};
use opsconsole_storage::{DirectorySink, FileStore};

/// Console views that own each command group.
pub mod views {
    pub const DASHBOARD: &str = "/home";
    pub const USERS: &str = "/uikit/Users";
    pub const REGIONS: &str = "/uikit/RegionList";
    pub const SERVERS: &str = "/uikit/ServersDB";
    pub const AGENTS: &str = "/uikit/Agents";
    pub const ROLES: &str = "/uikit/Roles";
    pub const AUDIT: &str = "/uikit/Audit";
    pub const FIND_LOG: &str = "/uikit/FindLog";
    pub const FIND_LOG_TRANSACTION: &str = "/uikit/FindLogTran";
    pub const ARCHIVE_LOG: &str = "/uikit/ArchiveLog";
    pub const RUNNING: &str = "/uikit/Running";
}

/// Wired console: storage, router, transport, session and services.
pub struct ConsoleContext {
    pub config: ConsoleConfig,
    pub store: Arc<dyn KeyValueStore>,
    pub router: Arc<Router>,
    pub transport: Arc<Transport>,
    pub session: SessionManager,
    pub agents: AgentService,
    pub regions: RegionService,
    pub servers: ServerDbService,
    pub services: ServiceService,
    pub roles: RoleService,
    pub logs: LogService,
    pub actuator: ActuatorService,
}

impl std::fmt::Debug for ConsoleContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleContext")
            .field("base_url", &self.transport.base_url().as_str())
            .field("router", &self.router)
            .finish()
    }
}

impl ConsoleContext {
    /// Build the context against the real backend, persisting client state
    /// to the configured state file.
    pub fn new(config: ConsoleConfig) -> AppResult<Self> {
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&config.storage.state_file)?);
        let backend: Arc<dyn HttpBackend> = Arc::new(ReqwestBackend::new(&config.api)?);
        let sink: Arc<dyn DownloadSink> = Arc::new(DirectorySink::new(&config.storage.download_dir));
        Self::with_parts(config, store, backend, sink)
    }

    /// Build the context from explicit parts.
    pub fn with_parts(
        config: ConsoleConfig,
        store: Arc<dyn KeyValueStore>,
        backend: Arc<dyn HttpBackend>,
        sink: Arc<dyn DownloadSink>,
    ) -> AppResult<Self> {
        let router = Arc::new(Router::new(
            Arc::new(StoredSession::new(Arc::clone(&store))),
            &config.session,
        ));

        let transport = Arc::new(
            Transport::builder(&config.api.base_url, backend)
                .with_session_middleware(
                    Arc::clone(&store),
                    router.clone(),
                    &config.session.entry_point,
                )
                .build()?,
        );
        debug!(base_url = %transport.base_url(), "Transport ready");

        let session = SessionManager::new(Arc::clone(&transport), Arc::clone(&store), &config.session);
        if session.expire_if_idle()? {
            debug!("Stored session had expired; starting signed out");
        }
        let logs = LogService::new(
            Arc::clone(&transport),
            sink,
            config.storage.archive_name.clone(),
        );

        Ok(Self {
            agents: AgentService::new(Arc::clone(&transport)),
            regions: RegionService::new(Arc::clone(&transport)),
            servers: ServerDbService::new(Arc::clone(&transport)),
            services: ServiceService::new(Arc::clone(&transport)),
            roles: RoleService::new(Arc::clone(&transport)),
            actuator: ActuatorService::new(Arc::clone(&transport)),
            logs,
            session,
            transport,
            router,
            store,
            config,
        })
    }

    /// Enter `view` through the guard and count it as user activity.
    /// Fails when the view needs a session and none is stored.
    pub fn open_view(&self, view: &str) -> AppResult<()> {
        self.router.enter(view)?;
        self.session.report_activity();
        Ok(())
    }

    /// Layout preferences hydrated from client storage.
    pub fn layout(&self) -> AppResult<LayoutStore> {
        LayoutStore::open(Arc::clone(&self.store), &self.config.layout)
    }
}
