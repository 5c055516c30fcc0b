//! SELinux label encoding and conflict detection for the control plane.

use k8s_openapi::api::core::v1::SELinuxOptions;

/// Translates `SELinuxOptions` into file labels and compares two labels for
/// mutual incompatibility.
///
/// A node-side implementation could fill the empty parts of the options from
/// the operating system defaults in `/etc/selinux/*`. Implementations in
/// this crate run off-host and work only with the fields they were given.
pub trait SELinuxLabelTranslator {
    /// Whether this deployment context treats SELinux as active.
    fn selinux_enabled(&self) -> bool;

    /// Encode `opts` into a single `user:role:type:level` file label.
    ///
    /// Absent options and fully empty options both encode to the empty
    /// string. Never fails; individual empty fields stay empty in the
    /// output (e.g. a type-only record encodes to `"::container_t:"`).
    fn selinux_options_to_file_label(&self, opts: Option<&SELinuxOptions>) -> String;

    /// Whether two labels produced by
    /// [`selinux_options_to_file_label`](Self::selinux_options_to_file_label)
    /// conflict.
    fn conflicts(&self, label_a: &str, label_b: &str) -> bool;
}

/// [`SELinuxLabelTranslator`] for use inside the cluster control plane.
///
/// The control plane usually runs as a container and cannot access
/// `/etc/selinux` on any host; even if it could, it may run on a different
/// distro than the worker nodes. This implementation therefore never tries
/// to fill in missing label fields and compares only what users specified
/// explicitly.
#[derive(Debug, Default, Clone, Copy)]
pub struct ControllerSELinuxTranslator;

impl SELinuxLabelTranslator for ControllerSELinuxTranslator {
    fn selinux_enabled(&self) -> bool {
        // The caller must have been explicitly enabled for this cluster, so
        // expect that all nodes have SELinux enabled.
        true
    }

    fn selinux_options_to_file_label(&self, opts: Option<&SELinuxOptions>) -> String {
        let Some(opts) = opts else {
            return String::new();
        };
        // Concatenate the existing fields without defaulting the missing
        // ones. An unset field and an explicitly empty field mean the same
        // thing: unspecified.
        let label = format!(
            "{}:{}:{}:{}",
            opts.user.as_deref().unwrap_or(""),
            opts.role.as_deref().unwrap_or(""),
            opts.type_.as_deref().unwrap_or(""),
            opts.level.as_deref().unwrap_or(""),
        );
        if label == ":::" {
            // Fully empty options behave the same as absent options.
            return String::new();
        }
        label
    }

    /// Returns true if the two labels cannot possibly resolve to the same
    /// effective label on a node.
    ///
    /// Unspecified fields are incomparable rather than equal-to-empty:
    /// `"system_u:system_r:container_t:s0:c1,c2"` does *not* conflict with
    /// `":::s0:c1,c2"`, because the node that runs such a workload may
    /// expand the latter to the former. It *does* conflict with
    /// `":::s0:c98,c99"` since two explicit levels differ.
    ///
    /// The split keeps at most 4 fields, so a level containing `:` (MCS
    /// ranges are sometimes rendered that way) survives intact only because
    /// level is the last field. Adding a field after level would break
    /// this.
    fn conflicts(&self, label_a: &str, label_b: &str) -> bool {
        let mut parts_a: Vec<&str> = label_a.splitn(4, ':').collect();
        let mut parts_b: Vec<&str> = label_b.splitn(4, ':').collect();

        // Keep parts_a the longer list, then pad parts_b with unspecified
        // fields up to the same length.
        if parts_a.len() < parts_b.len() {
            std::mem::swap(&mut parts_a, &mut parts_b);
        }
        parts_b.resize(parts_a.len(), "");

        for (part_a, part_b) in parts_a.iter().zip(&parts_b) {
            if part_a == part_b {
                continue;
            }
            if part_a.is_empty() || part_b.is_empty() {
                // Incomparable field, no conflict.
                continue;
            }
            // Both fields are explicit and differ.
            return true;
        }
        false
    }
}
