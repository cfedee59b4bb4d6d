//! Fixed identifiers baked into every request.

pub const LOWLAT_IMG: &str = "urn:publicid:IDN+emulab.net+image+PowderTeam:U18LL-SRSLTE";
pub const UBUNTU_IMG: &str = "urn:publicid:IDN+emulab.net+image+emulab-ops//UBUNTU18-64-STD";
pub const COMP_MANAGER_ID: &str = "urn:publicid:IDN+emulab.net+authority+cm";

// includes the avx build patch fix
pub const DEFAULT_NR_RAN_HASH: &str = "565b8482f926bea13b5b72e4a6651032fdac7083";
pub const DEFAULT_NR_CN_HASH: &str = "v1.4.0";

pub const OAI_DEPLOY_SCRIPT: &str = "/local/repository/bin/deploy-oai.sh";
pub const OPEN5GS_DEPLOY_SCRIPT: &str = "/local/repository/bin/deploy-open5gs.sh";
pub const TUNE_CPU_SCRIPT: &str = "/local/repository/bin/tune-cpu.sh";

pub const NODEB_ROLE: &str = "nodeb";

pub const CN_LINK_ADDR: &str = "192.168.1.1";
pub const GNB_LINK_ADDR: &str = "192.168.1.2";
pub const LINK_NETMASK: &str = "255.255.255.0";
/// kbps
pub const LINK_BANDWIDTH: u64 = 1000 * 1000;

pub const SPECTRUM_PRIORITY: u32 = 0;
