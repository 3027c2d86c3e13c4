// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// The API group all ODA Canvas custom resources live under
pub const GROUP: &str = "oda.tmforum.org";

/// The CRD version queried unless the caller picks another one
pub const VERSION: &str = "v1beta4";

/// Plural names of the ODA custom resource types
pub mod plurals {
    pub const EXPOSED_APIS: &str = "exposedapis";
    pub const DEPENDENT_APIS: &str = "dependentapis";
    pub const COMPONENTS: &str = "components";
}

/// Where the ODA controller pod runs and how to find it
pub mod controller {
    /// Namespace the canvas is installed into
    pub const NAMESPACE: &str = "canvas";
    /// Label selector matching the controller pod
    pub const LABEL_SELECTOR: &str = "app=oda-controller";
    /// Container to read logs from
    pub const CONTAINER: &str = "oda-controller";
}
