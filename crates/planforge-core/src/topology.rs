//! Network topology builder.
//!
//! Derives the VPC shape: fixed base CIDR, one or two availability zones,
//! and three /24 subnets per AZ at deterministic offsets. Total function
//! of its two inputs; no I/O, no errors.

use crate::model::plan::{Subnet, SubnetRole, VpcPlan};
use crate::model::recipe::Region;

/// Base CIDR for every derived VPC.
pub const VPC_CIDR: &str = "10.0.0.0/16";

/// Per-AZ third-octet stride. Subnets of AZ `i` live at `i*48`, `i*48+16`,
/// `i*48+32`, which keeps all /24 blocks pairwise disjoint.
const AZ_STRIDE: u8 = 48;
const APP_OFFSET: u8 = 16;
const DATA_OFFSET: u8 = 32;

/// Derive the VPC plan for a recipe.
///
/// AZ ids append `a`/`b` to the region code. Single-AZ plans get one AZ
/// and three subnets; multi-AZ plans get two AZs and six subnets.
pub fn derive_vpc(multi_az: bool, region: Region) -> VpcPlan {
    let suffixes: &[&str] = if multi_az { &["a", "b"] } else { &["a"] };
    let azs: Vec<String> = suffixes.iter().map(|s| format!("{}{}", region.as_str(), s)).collect();

    let mut subnets = Vec::with_capacity(azs.len() * 3);
    for (idx, az) in azs.iter().enumerate() {
        let base = idx as u8 * AZ_STRIDE;
        subnets.push(Subnet {
            az: az.clone(),
            role: SubnetRole::Public,
            cidr: format!("10.0.{base}.0/24"),
        });
        subnets.push(Subnet {
            az: az.clone(),
            role: SubnetRole::PrivateApp,
            cidr: format!("10.0.{}.0/24", base + APP_OFFSET),
        });
        subnets.push(Subnet {
            az: az.clone(),
            role: SubnetRole::PrivateData,
            cidr: format!("10.0.{}.0/24", base + DATA_OFFSET),
        });
    }

    VpcPlan { cidr: VPC_CIDR.to_string(), multi_az, azs, subnets }
}
