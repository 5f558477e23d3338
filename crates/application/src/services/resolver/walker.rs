use super::{IterativeResolver, Visited};
use futures::future::{BoxFuture, FutureExt};
use rootwalk_domain::{DnsQuery, DnsResponse, DomainError, RecordData, RecordType};
use std::net::IpAddr;
use tracing::{debug, warn};

impl IterativeResolver {
    /// Queries `server` and follows referrals until a terminal response.
    ///
    /// Returns the last response obtained together with the found flag, which
    /// is set once an answer or an SOA authority record has been reached.
    /// Glue and NS candidates are tried in section order and the first one
    /// that sets the flag wins.
    pub async fn walk(
        &self,
        query: &DnsQuery,
        server: IpAddr,
        found: bool,
    ) -> Result<(DnsResponse, bool), DomainError> {
        let mut visited = Visited::default();
        self.walk_at(query, server, found, 1, &mut visited).await
    }

    pub(crate) fn walk_at<'a>(
        &'a self,
        query: &'a DnsQuery,
        server: IpAddr,
        mut found: bool,
        depth: usize,
        visited: &'a mut Visited,
    ) -> BoxFuture<'a, Result<(DnsResponse, bool), DomainError>> {
        async move {
            if depth > self.max_depth {
                warn!(
                    query = %query,
                    server = %server,
                    max_depth = self.max_depth,
                    "Maximum referral depth reached, abandoning branch"
                );
                return Ok((DnsResponse::empty(), false));
            }

            if !visited.insert((server, query.clone())) {
                debug!(query = %query, server = %server, "Server already asked this question");
                return Ok((DnsResponse::empty(), false));
            }

            debug!(query = %query, server = %server, depth = depth, "Querying server");

            let outcome = self
                .transport
                .query(query, server, self.query_timeout)
                .await
                .and_then(|response| {
                    if response.status.is_usable() {
                        Ok(response)
                    } else {
                        Err(DomainError::ServerFailure {
                            server: server.to_string(),
                            rcode: response.status.to_string(),
                        })
                    }
                });

            let mut response = match outcome {
                Ok(response) => response,
                Err(e) if e.is_recoverable() => {
                    debug!(error = %e, query = %query, "No information from this server");
                    return Ok((DnsResponse::empty(), false));
                }
                Err(e) => return Err(e),
            };

            if response.has_answers() {
                debug!(
                    query = %query,
                    server = %server,
                    answers = response.answers.len(),
                    "Answer received"
                );
                return Ok((response, true));
            }

            let glue = response.glue_addresses();

            if !glue.is_empty() {
                debug!(query = %query, glue = glue.len(), "Referral with glue");

                for address in glue {
                    let (next, next_found) = self
                        .walk_at(query, address, found, depth + 1, visited)
                        .await?;
                    response = next;
                    found = next_found;
                    if found {
                        break;
                    }
                }
            } else if !response.authority.is_empty() && !found {
                let authority = response.authority.clone();

                for record in &authority {
                    match &record.data {
                        RecordData::NS(ns_name) => {
                            // Nameserver addresses are always looked up as A,
                            // whatever the original query type.
                            let ns_query = DnsQuery::new(ns_name, RecordType::A);
                            let ns_response = self
                                .resolve_from_roots(&ns_query, depth + 1, visited)
                                .await?;

                            let Some(address) = ns_response.first_ipv4_answer() else {
                                debug!(
                                    nameserver = %ns_name,
                                    "Nameserver has no address, skipping"
                                );
                                continue;
                            };

                            debug!(
                                query = %query,
                                nameserver = %ns_name,
                                address = %address,
                                "Following NS referral"
                            );

                            let (next, next_found) = self
                                .walk_at(query, address, found, depth + 1, visited)
                                .await?;
                            response = next;
                            found = next_found;
                        }
                        RecordData::SOA => {
                            found = true;
                        }
                        _ => {}
                    }

                    if found {
                        break;
                    }
                }
            }

            Ok((response, found))
        }
        .boxed()
    }
}
