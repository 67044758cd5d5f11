use models::{ListDocument, MonitorGroup};

use crate::{
    client::Client,
    error::{Error, ListAllError},
};

impl Client {
    /// Fetch one page of monitor groups. `page` is 1-based; values below 1
    /// are clamped.
    pub async fn list_monitor_groups(
        &self,
        page: u64,
    ) -> Result<ListDocument<MonitorGroup>, Error> {
        self.list_page(page, None).await
    }

    /// Enumerate every monitor group across all pages, in server order.
    ///
    /// Same weak-consistency caveat as [`Client::list_all_monitors`].
    pub async fn list_all_monitor_groups(
        &self,
    ) -> Result<Vec<MonitorGroup>, ListAllError<MonitorGroup>> {
        self.list_all().await
    }

    /// Create a monitor group. The returned attributes carry the
    /// server-assigned id.
    pub async fn create_monitor_group(&self, group: &MonitorGroup) -> Result<MonitorGroup, Error> {
        self.create_resource(group).await
    }

    /// Fetch a single monitor group by id.
    pub async fn get_monitor_group(&self, id: &str) -> Result<MonitorGroup, Error> {
        self.get_resource(id).await
    }

    /// Update a monitor group in place.
    pub async fn update_monitor_group(
        &self,
        id: &str,
        group: &MonitorGroup,
    ) -> Result<MonitorGroup, Error> {
        self.update_resource(id, group).await
    }

    /// Delete a monitor group by id.
    pub async fn delete_monitor_group(&self, id: &str) -> Result<(), Error> {
        self.delete_resource::<MonitorGroup>(id).await
    }
}
