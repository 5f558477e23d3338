use super::{IterativeResolver, Visited};
use futures::future::{BoxFuture, FutureExt};
use rootwalk_domain::{DnsQuery, DnsResponse, DomainError, RecordType};
use tracing::{debug, warn};

impl IterativeResolver {
    /// Runs the referral walk from each root server until one of them
    /// produces an answer or an authoritative negative.
    ///
    /// A leading CNAME answer to a non-CNAME query restarts resolution from
    /// the roots for the alias target. When every root is exhausted the last
    /// response seen is returned, which may be empty.
    pub(crate) fn resolve_from_roots<'a>(
        &'a self,
        query: &'a DnsQuery,
        depth: usize,
        visited: &'a mut Visited,
    ) -> BoxFuture<'a, Result<DnsResponse, DomainError>> {
        async move {
            if depth > self.max_depth {
                warn!(
                    query = %query,
                    max_depth = self.max_depth,
                    "Maximum resolution depth reached, abandoning lookup"
                );
                return Ok(DnsResponse::empty());
            }

            let mut response = DnsResponse::empty();

            for &root in self.root_servers.iter() {
                let (walked, _found) = self
                    .walk_at(query, root, false, depth + 1, visited)
                    .await?;
                response = walked;

                if response.has_answers() {
                    if query.record_type != RecordType::CNAME {
                        if let Some(target) = response.cname_target() {
                            let alias_query = DnsQuery::new(target, query.record_type);
                            debug!(
                                name = %query.domain,
                                target = %alias_query.domain,
                                "CNAME answer, restarting from the roots"
                            );
                            return self
                                .resolve_from_roots(&alias_query, depth + 1, visited)
                                .await;
                        }
                    }
                    return Ok(response);
                }

                if response.is_negative() {
                    debug!(query = %query, root = %root, "Authoritative negative answer");
                    break;
                }

                debug!(query = %query, root = %root, "No usable answer via root server");
            }

            if response.is_empty() {
                warn!(query = %query, "All root servers exhausted without a response");
            } else if !response.is_terminal() {
                warn!(query = %query, "All root servers exhausted without an answer");
            }

            Ok(response)
        }
        .boxed()
    }
}
