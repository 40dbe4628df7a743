//! Sandy Bridge-EP (family 06, model 2D)
//!
//! MSRs taken from Intel SDM section 35.8, table 35-12.
//!
//! Vetting rules applied to every register listed here:
//! 1. Nothing that reads or modifies interrupt delivery (thermal thresholds,
//!    interrupt vectors, ...).
//! 2. No debugging facilities; they can expose kernel memory.
//! 3. No DRAM record writers (PEBS buffers need a dedicated interface).
//! 4. Anything affecting performance must be reset on program exit.
//! 5. Performance counters are zeroed and disabled by the owner.
//! 6. No register without an immediate need.

use crate::entry::WhitelistEntry;

pub static ENTRIES: [WhitelistEntry; 49] = [
    WhitelistEntry::ro("SMSR_TIME_STAMP_COUNTER", 0x010),
    WhitelistEntry::ro("SMSR_PLATFORM_ID", 0x017),
    WhitelistEntry::rw("SMSR_PMC0", 0x0C1),
    WhitelistEntry::rw("SMSR_PMC1", 0x0C2),
    WhitelistEntry::rw("SMSR_PMC2", 0x0C3),
    WhitelistEntry::rw("SMSR_PMC3", 0x0C4),
    WhitelistEntry::rw("SMSR_PMC4", 0x0C5),
    WhitelistEntry::rw("SMSR_PMC5", 0x0C6),
    WhitelistEntry::rw("SMSR_PMC6", 0x0C7),
    WhitelistEntry::rw("SMSR_PMC7", 0x0C8),
    WhitelistEntry::ro("SMSR_MPERF", 0x0E7),
    WhitelistEntry::ro("SMSR_APERF", 0x0E8),
    WhitelistEntry::rw("SMSR_PERFEVTSEL0", 0x186),
    WhitelistEntry::rw("SMSR_PERFEVTSEL1", 0x187),
    WhitelistEntry::rw("SMSR_PERFEVTSEL2", 0x188),
    WhitelistEntry::rw("SMSR_PERFEVTSEL3", 0x189),
    WhitelistEntry::rw("SMSR_PERFEVTSEL4", 0x18A),
    WhitelistEntry::rw("SMSR_PERFEVTSEL5", 0x18B),
    WhitelistEntry::rw("SMSR_PERFEVTSEL6", 0x18C),
    WhitelistEntry::rw("SMSR_PERFEVTSEL7", 0x18D),
    WhitelistEntry::ro("SMSR_PERF_STATUS", 0x198),
    WhitelistEntry::rw("SMSR_PERF_CTL", 0x199),
    WhitelistEntry::rw("SMSR_CLOCK_MODULATION", 0x19A),
    WhitelistEntry::ro("SMSR_THERM_STATUS", 0x19C),
    WhitelistEntry::rw("SMSR_MISC_ENABLE", 0x1A0),
    WhitelistEntry::rw("SMSR_OFFCORE_RSP_0", 0x1A6),
    WhitelistEntry::rw("SMSR_OFFCORE_RSP_1", 0x1A7),
    WhitelistEntry::rw("SMSR_ENERGY_PERF_BIAS", 0x1B0),
    WhitelistEntry::ro("SMSR_PACKAGE_THERM_STATUS", 0x1B1),
    WhitelistEntry::rw("SMSR_FIXED_CTR0", 0x309),
    // the TLCC2 header also lists SMSR_FIXED_CTR2 at 0x30A; 0x30B was
    // never vetted and stays denied
    WhitelistEntry::rw("SMSR_FIXED_CTR1", 0x30A),
    WhitelistEntry::ro("SMSR_PERF_CAPABILITIES", 0x345),
    WhitelistEntry::rw("SMSR_FIXED_CTR_CTRL", 0x38D),
    WhitelistEntry::ro("SMSR_PERF_GLOBAL_STATUS", 0x38E),
    WhitelistEntry::rw("SMSR_PERF_GLOBAL_CTRL", 0x38F),
    WhitelistEntry::rw("SMSR_PERF_GLOBAL_OVF_CTRL", 0x390),
    WhitelistEntry::rw("SMSR_PEBS_ENABLE", 0x3F1),
    WhitelistEntry::rw("SMSR_PEBS_LD_LAT", 0x3F6),
    WhitelistEntry::ro("SMSR_RAPL_POWER_UNIT", 0x606),
    WhitelistEntry::rw("SMSR_PKG_POWER_LIMIT", 0x610),
    WhitelistEntry::ro("SMSR_PKG_ENERGY_STATUS", 0x611),
    WhitelistEntry::ro("SMSR_PKG_POWER_INFO", 0x612),
    WhitelistEntry::rw("SMSR_PP0_POWER_LIMIT", 0x638),
    WhitelistEntry::ro("SMSR_PP0_ENERGY_STATUS", 0x639),
    WhitelistEntry::ro("SMSR_MSR_PKG_PERF_STATUS", 0x613),
    WhitelistEntry::rw("SMSR_DRAM_POWER_LIMIT", 0x618),
    WhitelistEntry::ro("SMSR_DRAM_ENERGY_STATUS", 0x619),
    WhitelistEntry::ro("SMSR_DRAM_PERF_STATUS", 0x61B),
    WhitelistEntry::ro("SMSR_DRAM_POWER_INFO", 0x61C),
];
