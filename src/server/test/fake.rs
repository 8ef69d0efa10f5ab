use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use crate::{
    model::command::CommandSpec,
    server::{
        error::discord::DiscordApiError,
        model::{
            discord::{CreatedInvite, DiscordChannel, InviteParams, TEXT_CHANNEL_KIND},
            server::ServerRecord,
        },
        service::{discord::DiscordApi, server::ServerRecordStore},
    },
};

pub fn server_record(id: &str, updated_at: DateTime<Utc>) -> ServerRecord {
    ServerRecord {
        id: id.to_string(),
        name: format!("Server {}", id),
        description: None,
        invite_url: None,
        verified: true,
        created_at: updated_at,
        updated_at,
    }
}

/// In-memory listing store with call counters and switchable failures.
#[derive(Default)]
pub struct FakeServerStore {
    servers: Mutex<HashMap<String, ServerRecord>>,
    fail_reads: bool,
    fail_writes: bool,
    find_calls: AtomicUsize,
    touch_calls: AtomicUsize,
}

impl FakeServerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_server(self, server: ServerRecord) -> Self {
        self.servers
            .lock()
            .unwrap()
            .insert(server.id.clone(), server);
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn get(&self, id: &str) -> Option<ServerRecord> {
        self.servers.lock().unwrap().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.servers.lock().unwrap().len()
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn touch_calls(&self) -> usize {
        self.touch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ServerRecordStore for FakeServerStore {
    async fn find_server(&self, id: &str) -> Result<Option<ServerRecord>, DbErr> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(DbErr::Custom("read failure".to_string()));
        }

        Ok(self.get(id))
    }

    async fn touch_server(&self, id: &str, at: DateTime<Utc>) -> Result<bool, DbErr> {
        self.touch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(DbErr::Custom("write failure".to_string()));
        }

        match self.servers.lock().unwrap().get_mut(id) {
            Some(server) => {
                server.updated_at = at;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Scripted Discord REST client recording every call it receives.
pub struct FakeDiscordApi {
    channels: Vec<DiscordChannel>,
    invite_code: String,
    fail_channel_list: bool,
    fail_invite: bool,
    fail_registration: bool,
    list_calls: AtomicUsize,
    invite_calls: AtomicUsize,
    register_calls: AtomicUsize,
    last_invite: Mutex<Option<(u64, InviteParams)>>,
    registered: Mutex<Vec<CommandSpec>>,
}

impl FakeDiscordApi {
    /// One text channel with id 111 and invite code `abc123`.
    pub fn new() -> Self {
        Self {
            channels: vec![DiscordChannel {
                id: 111,
                kind: TEXT_CHANNEL_KIND,
            }],
            invite_code: "abc123".to_string(),
            fail_channel_list: false,
            fail_invite: false,
            fail_registration: false,
            list_calls: AtomicUsize::new(0),
            invite_calls: AtomicUsize::new(0),
            register_calls: AtomicUsize::new(0),
            last_invite: Mutex::new(None),
            registered: Mutex::new(Vec::new()),
        }
    }

    pub fn with_channels(mut self, channels: Vec<DiscordChannel>) -> Self {
        self.channels = channels;
        self
    }

    pub fn failing_channel_list(mut self) -> Self {
        self.fail_channel_list = true;
        self
    }

    pub fn failing_invite(mut self) -> Self {
        self.fail_invite = true;
        self
    }

    pub fn failing_registration(mut self) -> Self {
        self.fail_registration = true;
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn invite_calls(&self) -> usize {
        self.invite_calls.load(Ordering::SeqCst)
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    pub fn last_invite(&self) -> Option<(u64, InviteParams)> {
        *self.last_invite.lock().unwrap()
    }

    pub fn registered_commands(&self) -> Vec<CommandSpec> {
        self.registered.lock().unwrap().clone()
    }
}

#[async_trait]
impl DiscordApi for FakeDiscordApi {
    async fn list_guild_channels(
        &self,
        _guild_id: &str,
    ) -> Result<Vec<DiscordChannel>, DiscordApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_channel_list {
            return Err(DiscordApiError::MissingBotToken);
        }

        Ok(self.channels.clone())
    }

    async fn create_invite(
        &self,
        channel_id: u64,
        params: &InviteParams,
    ) -> Result<CreatedInvite, DiscordApiError> {
        self.invite_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_invite.lock().unwrap() = Some((channel_id, *params));
        if self.fail_invite {
            return Err(DiscordApiError::MissingBotToken);
        }

        Ok(CreatedInvite {
            code: self.invite_code.clone(),
        })
    }

    async fn overwrite_global_commands(
        &self,
        commands: &[CommandSpec],
    ) -> Result<usize, DiscordApiError> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_registration {
            return Err(DiscordApiError::MissingApplicationId);
        }

        *self.registered.lock().unwrap() = commands.to_vec();
        Ok(commands.len())
    }
}
