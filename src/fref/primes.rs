/// Hash-table sizing for the Forward-Reference Index.
///
/// The prime schedule below is reproduced verbatim from `hash.c`: primes
/// of the form `4i+3`, each more than twice the previous one, all below
/// 2^40. `hash.c`'s comment block keeps a smaller, commented-out "#if 0"
/// prefix of the schedule (`3, 7, 19, 43, ...`); this crate starts from
/// the same point the teacher's upstream does (`14051`), since those
/// smallest entries are dead code in the original too.
pub const PRIMES: [u64; 27] = [
    14051,
    28111,
    56239,
    112507,
    225023,
    450067,
    900139,
    1800311,
    3600659,
    7201351,
    14402743,
    28805519,
    57611039,
    115222091,
    230444239,
    460888499,
    921777067,
    1843554151,
    3687108307,
    7374216631,
    14748433279,
    29496866579,
    58993733159,
    117987466379,
    235974932759,
    471949865531,
    943899731087,
    // 2^40 = 1099511627776
];

/// Index of the smallest prime `>= n_tokens`, or the largest schedule
/// entry if `n_tokens` exceeds every prime in the table. Mirrors
/// `hash.c`'s `init_hash_table`: `while (prime[n] < Token_Array_Length()) n++;`
pub fn schedule_index_for(n_tokens: u64) -> usize {
    PRIMES
        .iter()
        .position(|&p| p >= n_tokens)
        .unwrap_or(PRIMES.len() - 1)
}

#[cfg(test)]
#[path = "primes_test.rs"]
mod tests;
