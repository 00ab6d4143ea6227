//! Static tables for the fixed 8 row, 2 data column card symbol.

/// Symbols of the base 91 alphabet used by [PACKED_PATTERNS], in value order.
pub const PATTERN_ALPHABET: &[u8; 91] = br#"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!#$%&()*+,./:;<=>?@[]^_`{|}~""#;

/// Filler byte that may appear inside a packed group and carries no digit.
pub const PATTERN_SKIP: u8 = b'-';

/// Bar/space patterns of every codeword in every cluster, packed as one
/// 3 byte group per `(codeword, cluster)` pair at index `3 * codeword + cluster`.
pub const PACKED_PATTERNS: &[u8] = concat!(
    r#"LYnWw;F5)Q]NcPxLYqWw>Q]Q--JLYtWw[F5:Q]TcP3LYwWw_Q]W--PF5=Ww|F5@LYzcP9LY2F5^Q]c--V--YWxCF5{"#,
    r#"F5~Q]i--b--eWxIcP^F6LQ]o--oLY<Q]vF6OQ]yWxVcP~F6RcP{--uLY]LY?F6UQ]4Q]1cQE--xWxb--0F6XLY`F6a"#,
    r#"--3Q]7cQK--:Wxh--6F6wLZAWx3LZWQ]%cQd--@LZG--=F62Q],Wx9LZcLZMcQj--{LZT--^F68Q]_Wx(-BUWx6--~"#,
    r#"F6`F6zWx/-BaLZZQ^bF7AQ]"WyB-B5F65Q^hWy.LZfWyHLa/Q^FQ^nQ_vF6#Q^tWzVLZlLZ"F8OF6*Q^$La?LZrLaF"#,
    r#"Q_1F6;Q^+F8UF6]LaLLa`LZ4LaR-C0Q^eF7!F8a-BXLakLbAF6}F7)-C6LZ!LaqF8g-BdF7:-C$F7D-ClF8tLZ)F8L"#,
    r#"LbT-BjLa<Q__F7J-Cr-C=-BpF8RF8zF7PLa]LbZ-B2-Cx-C^F7cF8XF85LaC-C3Lbf-B8F8d-C~F7i-C9F8#-B&cSa"#,
    r#"-DRF7o-C:F8]-B.F8wLb4-CAcSg-DXF7%-C@F8}-CGF82-Dd-CMcSmF9DQ_s-C{-D2WzS-DBF9ccR^Wz~-D8Q_ycS#"#,
    r#"-D&WzY-DUF!qcR~W0ELdQQ_4-DaQ{[WzeW0KF!wQ_!Q`9LdWWzkW0jQ{|Q_)Q`(-E@Q_:Q`/F!2LbQLchLdcQ_[Q{H"#,
    r#"-E{Wz3LcnF!8LbWLct-FBQ_|F!F-FHWz9Lc+-FOLbcF!LF!?Q`CF!RLd1Lbi-E,-FUQ`IF!tF!`LboLdTLd7Lbu-E="#,
    r#"-FaF8?F!zF#ALb1-E^-FgQ`bF!5-FmF8`-E~-FzLb7-FEF#ZQ`hcU8-F5F9A-FRF#fLb%F!]-F#F9GcU&-F}Lb,-FX"#,
    r#"F$<F9M-FdLfyF9SW2gQ~Y-Dz-F2-HRF9ZW2mF$]Lb"Q}ELf4-D5Q}K-HXF9fLe(F$}LcFLe/Lf!-D#F$n-HdF9lF$t"#,
    r#"F%D-D*-HO-HjF9rF$?F%J-D;-HU-Hw-D}F$`F%WF9!-HaLf|-ED-Hg-H2F9)cXDF%c-EJ-Hz-H8-EP-H5F%i-EiW4&"#,
    r#"-H&-EoQ"m-H.Q{>LhKF%7W10-Jw-IGcUaF(W-JtQ{_-J2F(TW16-J8Lh_Q{"-J`-JzW1$-L]F(ZQ|F-L}Lh"Q|L-`s"#,
    r#"-J5LdyG0SF(fQ|YMS^-J#W1~-`yF(lLd4G0Y-J*Q|eMS~-J]Ld!-`4-J}Q|kG0e-KDLd)-`!-L?Ld:G0kLkbF#W-`)"#,
    r#"F*7Ld|dKhF*%Q|9-`[-MMF#cG03MS@LeCdKnR<2F#i-`|XrcLeIG09G0VF#odKtMS{F#u-{CR<8-F`-{IG0bF#7XsF"#,
    r#"MTBLehdK+R<&-GA-{b-`7F#%XsLG0h-GG-{h-`%F#,XsRG00-GMR=)MTa-GSXsqR=A-GfR=:-`_F$FR=@G06-GlMUo"#,
    r#"MTg-GrR>O-`"-G)MUuG0$Q~VMU0-{FW3{G2M-{LQ~bMU=-{YW4BG2SG0~Q~hG2YMT#Q~nF,~-{eLf_Lm#G1EQ~6RFl"#,
    r#"-{kLf"-Oe-{qQ~$F.E-{9LgFLm*G1jLgL-Ok-{(F%4F.K-|HLgeLm;Lm8F%!-OqRFiLgkF.QW#IF%)-OwLm&F%:F.W"#,
    r#"RFo-Ic-O2W#OF&C-|>F.H-IiG20Lm.F&IMVaRFu-Io-O9F.N-Iu-|_Lm>-I%G26RF0-I,-O(F.TRA3F.pLm_W6dG2$"#,
    r#"G2xRA9-O/MVXRA(-}FR>}Lib-O?F.gRBB-}LG23Lih-O`MVdLindM(R?DF("-}YF.mLi$G2~LnMF)FceyRF=F)LdM/"#,
    r#"-O+-K!-PH-}CF)k-}eG2(-K)ce4MVp-K:-PN-O<RC~-}kF.yRDE-PT-O]Lk9Xun-}VLk(-}9G2{F+hW$WMV8F+nXut"#,
    r#"-PER<z-Ps-}bXrZW$cG3BdJ"R@LMV&R<5RG`-PKXrfR@RF.;dKFRHALnxR<#MW:-PQXrlLo5-}nR<*MW@-PWXrrLo#"#,
    r#"-}6R<;G4uG3gR<[G40-PpMTX-Q6-}$R<}F:gG3mXr!LpG-PvMTd-Q$F/VR=DF:m-P1Xr)LpM-~EMTj-Q+-P>R=JF:s"#,
    r#"-~KMTp-Q<-P_R=PF:yLpDMTv-Q]RH)MT1-Q}W%qG0{-"VF:jMT8G4{LpJR=i-RERH:G1B-"bF:pMT&G5BLpPR=o-RK"#,
    r#"RH@G1HF:;F:vMT.-RQLpVG1N-"nF:1MT>-RWF:7G1TdPKG4^G1Z-"6MX5-{6cg_R[fG1g-RpF:&MUG-"$G4~-{$-Rv"#,
    r#"MX#G1mXw/-RHMUMW&4-"e-{+R]tLpuG1sRJcMX*-{<MZR-RNG1yLrA-"k-{]G6@G5K-|E-TB-RTG1*F<&F:_-|KLro"#,
    r#"G5QG1;-TH-"w-|QF<.-"3-|W-TNG5d-|pF<>MYD-|v-TT-RmW#F-TZ-"9cd+BB3G5j-ObG7d-RsW#L-TmF;Scd<BB9"#,
    r#"G5p-Oh-Ts-RyW#RBB(-"/cd]-Ty-"?-OnBCBBABW#X-T;G5&W#d-Vj-R;R>`F?JBAHXt7-Vp-R[dMhF?PBANRF)-Vv"#,
    r#"-R|R?A-V1-SVceQBD~F<#RF:-V.LrlW#wBEERKLXt,-V>F<*RF@-X*LrrR?MF[rRKRRF{-X;F<;R?S-X[LrxRGBBGg"#,
    r#"F<[MV5-YPLr3R?f-aMF<|XuF-aSF=CLnoB?`BB0MV#Hu7G7aR?lNNhMaALnuB@A-TjRGUHu%BB6R?rB@GG7gLn0Hu,"#,
    r#"MaGMV;B@M-TpLn6B@SF=PMV[eE:Lr@Ln$B@f-TvG3dHvFBB+MWDeE@G7sR?)B@l-T1F/MB@rF=bG3jYmu-T7MWJB@)"#,
    r#"BB~F/SYm0G7#Ln^S.S-T.MWPS.YBCEF/YNO[G7*G3vNO|-T>F/eHw1F=0G31Hw7-T_F/kBI%BCQ-~BG&n-T"G3&MhN"#,
    r#"-USMWoBI,-UY-P;G&tF?G-~HMhTLt,G3.BI=RMt-P[G&zF?MF/3BI^Lt=G3>G&5F?S-P|BI~Lt^-~TBJEF?Y-QCB]c"#,
    r#"F?e-~ZHxCBD{-~mBJLG98G4MB]iMci-QVHxI-V*-~sBJRBEB-QbG&]G9&-~yBJX-V;-QhB]uF?x-~;BJdG9.W%neHR"#,
    r#"-V[cgNB]%BEN-Q9dZA-V|W%tBJwBETcgTB],BEg-Q(BJ2-WPW%zYo@-WV-Q/X6#-WbW%5S:0LwOR[cSBjLwUXwCNRY"#,
    r#"F[6RILMjHG$DR[iHy|BGjXwIF{T-YSRIRL0_-YYW%]RT6-YeRIX-czHu4R[uF{ZNNeRIdL0"S,EMYA-c5Hu!R[%F{f"#,
    r#"NNkLp:L1FB@DMYG-c#Hu)R[,F{lNNqLp@-c*B@JRI2F{rHu:Lp{-c;B@PMYSBLIB@VLqBG)/B@cG5#MjvHvCMYl-c]"#,
    r#"NN(F;uBLOB@iG5*G)?HvIMYr-c}NN/F;0F{!B@oLqaG)`HvOF;6-dDB@uG5[BLaB@0F;$-dJB@%BAjBLgHvnG6J-dP"#,
    r#"B@,-SSB_!HvtBApHzkB@=G6PBLtB[L-SYB_)B[RF;~-dcMhK-SeBLzR";BA1B_:X5x-Sk-diG&qBA.BL5MhQ-S3-do"#,
    r#"R"[BA>B`IG&w-S9BL]MhWW(/-d%R"|civ-e?G&2-TEF}1MhcW(?L3bG&8-TK-e`MhiW(`F}7Hw"R^!L3hNP$Xyk-fA"#,
    r#"S/mRKtF}%G&/W)T-fGHxFRKzF},NP+R^:-fMBJORK5-fSB]lMaiBNqMh1R_IG,QNP<LsR-fZBJUMaoBNwG&`LsXG,W"#,
    r#"HxRMau-ffBJaLsdF~FB]xG8G-flBJgMa,BN8B]!F=@-frHxkLs2B|FNQKF={BN?BJtG8SB|LB])F>B-f!Mh_BC*BN`"#,
    r#"BJzG8r-f)G(Z-U0-hWHxwBC;F"|BJ5-U6L59B]@BC[-hcBJ#-U$GACB^IBDP-hiHx/-U~GAIBJ]W+Q-hoB^O-Vm-hu"#,
    r#"BJ}W+WBP<B^UR{FG/yB^tRM?-h7BKcR{LBP]L0[RM`-h%RT3Mc)BP}W=dLuz-h,L0|Mc:B~nRT9Lu5BQWW=jG!o-iF"#,
    r#"L1CF@X-j4RT(G!uGCeL1IF@d-j!RT/BFMGCkL1O-W{-j)G)+BFS-j:Mjs-XBBSTSCSW.y-kCF{1R}nBSZG)<RPW-kI"#,
    r#"RUBMfL-l"SCYLw`GE$F{7G$:-mFL1hF]5-mLRUHS,BBU1F{%Yl&-mkG)}eEo-ohMj!S,H-onF{,Yl.C:jL1tS,NIpJ"#,
    r#"G*JYl>C:pB_7S,TIpPHzhS,ZC:vNSHNN$C:1BLqS,mC:.B_%YmMC:>HznNN+Zg|NSNS,sT&7-dZNN<OJfBLwS,yIrD"#,
    r#"G*WNN]CDPMj|NN}H8@-dfHvkNb2F|FNOKCDVL1+S,;H8{HzzHvqCDb-dlNOQH9BBL8HvwCDhG*iNOWCDn-drHv2C<*"#,
    r#"B_~Hv8IrrB`FB[ICD0Hz+Hv/C<;BL?NOvCD6B`LB[OC<[Hz<Hv?CD$-d!B[UC=PBL`Hv`CD~G*7B[aBW{-d)B[gG@8"#,
    r#"F|qB[tMviB`XHwTBXBBMGB[zG@&B`qB[5MvoBMZB[]BXHB`wX5uG@.-eIdYUBXNBMfBI)G@>L3YX50BXTRV~dYaBXZ"#,
    r#"W?#BI:CFxL3eX56H#XRWEBI@BXgL3kX5$CF3RWKS/jH#dL3qYoJBXmL3wSASCF9G,NS/pBXsMl>YoPCF(SE0SAYBXy"#,
    r#"F}|X5~C?MG,TSAeCF{RWjS/1C?SF~CSAkBX*L3(NQHCGBMl"S/.BX;F~IMh[GJoG,fNQNL(OF~OS/>Rh?G,lMh|-q."#,
    r#"F~USA9GJuB|CMiCL(UH1(NQZ-q>NUpMiIGJ0BN<Hx+L(aB|INQs-q_H1/G(1GJ6-f7Hx<-q"BN]NQyGJ$G,4G(7-rF"#,
    r#"H1?MihBZd-f%G(%G^DF~nHx}Mx)B|UG(,-rM-f,B^qBZjBODHyQG^JB|aBKZ-rSBOJB^wGJ^B|nHyWG^PH2NBKf-rY"#,
    r#"BOWG)FBZvB|tBKl-re-gFB^8BZ1BOcBKr-rkB|zB^?CH^-gLBK!H%5BOiB^`BZ&B|<BK)CH~-gqcsA-rxL56-cwBZ."#,
    r#"RYgF{WCIEL5$csG-r3RYm-c2BZ>L5+F{c-r9L5<csMC[uG/v-c8CIdMoV-c&BaMGAeX7@-r{G/1da2-tJMobBLLGL:"#,
    r#"GAkW=#L*wL6Kcsl-tPGAq-c`GL@G/%BLRL*2GAwW=*-tVB~kX8BGL{H4K-dA-tbBQTW=;GMBB~qS;*-thH4QYqr-tn"#,
    r#"-iCSC0Bb#BQZS;;G`lG/"RUj-tu-iIW>JBb*GA/S;[G`rB~2RUp-t0-iOSC$GMaBQlRUv-t6-iUNSpBb[BQ4S<P-t$"#,
    r#"-inMkYCKa-itNSvBcJRa&L2HCKgL8NMke-t^Mq3NS1BcPG;|L2N-t~G<CMkk-vrCA+L2TGORBS1H0NL,]-kkNS>-vx"#,
    r#"CA]G*|GOXBS%H0T-v3IpGF|+GOdC:mG+C-v9IpMH0Z-v(C:sF|<BeGIpSG+IG|,OH^F|]-v@C:yB`<BeMIpYH0y-v{"#,
    r#"C:4BM7BeSIpeB`]-wBC:*-eqCM8IprBM%BerOIRB`}-waC:;-ew-x=IpxBM,GQzC:[-e2-x^Ip3B{WGQ5C:|BNF-x~"#,
    r#"C;Ccui-yEC;P-e]BgoIp@F}4-yXC;VcuoBguC;b-e}-ydC;0-fD-0UH8=X!XGS`NbzBNt-0aS`ZW@G-0gH8^X!dBi:"#,
    r#"Nb5-fc-05H8~W@MD)<Nb#S>MJjyH9ESE{D)]Nb*S>SD)}H9KRW*D*WC<&SFBC}4IroRW;I3eOKONU;C}!CDxMm6I3k"#,
    r#"C<.NU[C})Nb}L4pC}:OKUMm$D,TCD3L4vC~CH9dH2vD,ZNcDG.eC~ICD9H21CRkC<_F"NH;KIr6G.kNp;CD(F"TCRq"#,
    r#"H9pB}TH;QC=FBPCCRwC=MB}ZH;WIr=-g<CR2CD{BPICR8C=S-g]C""Ir^cw)I5$CEB-hZCR/H9&-hfDAFCEHX$5CR?"#,
    r#"C=eW]oDALC=xS@uCR`CEgSHdD/1C=3RZMDAkCEmNXSCSTMvfMpBBlQSOFL6;HD[X,+H4[M93MvlG:$BlWSOLGBvHD|"#,
    r#"MvrB"1M99SORBRkBlcMvx-jTHECMv3-j7BliH#UT%qHEINd`ZgQBloG[DT%wBluH#aZgWCT+NeAT%2H=sG[JT%8Bl1"#,
    r#"Mv:OIOCT<NeGT%?H=yG[POIUBl7H#mT%`HEhG[VOIaBl%H#sOIgCT}G[bIp=Bl,C?JOIzDChIt:Ip^CUQCF^OI5DCn"#,
    r#"C?PIp~Bl"NefIqECUWBX&C;xBmFCF~IqXGX9H##C;3L[jIt{IqdRwJBX.C;9GX(G[uC;(L[pC?bC;{GX/BX>C<BL[v"#,
    r#"CGKYz|GX?C?heS9GX`CGQCDSBnyC?uY0CHGYIuUCDYM#~CGdY0I-5hC?0T(<Bn4BYMZiyHGeCGjS`7-5nC?6T(]GYN"#,
    r#"BYSS`%HGkCGpT(}-5tC?^S`,Bn)CG&OKw-5zBYxT)WBn:Rh<Ncf-55XAyOK2CWNRh]NclH?>XA4OK8Bn|Rh}NcrCWT"#,
    r#"RiDIsU-5+Mx%OK`BoCSQnH!DCWZL(wIsa-5<RiWH!JBoISQtIsg-5]L(2H!PDE(RicC=^CWyL(8Is5BohMx^CE&-6Q"#,
    r#"L(&C=~GaEH%2CE.L^*NgcC>EGaKG^lCE>L^;H%8C>dGaQNgiCFMGaWGKUdmpBp_G^rBW~HI6MyRG@#-7(GKadmvBp""#,
    r#"L)ABXEHI$H%.BXK-7/GKgY2eGavG^3CF0-7?GKmX.NBqLC[rY2k-7`IwRBXjCYvCIaX.TBqeC[xT+TCY1IwXS}C-8N"#,
    r#"BaJT+ZBqkCIgSO<-8TH&GS}IGcm-r^SO]L{MBaPOM]GcsG^@Ne%GcyC[9OM}Bsb-r~MwwHLBGK#Ne,-!KCIsMw2Bsh"#,
    r#"-sEIu2-!QC[@H$lBsnCI#Iu8-!WC[{G]UCa[BauH$rBs$CI*G]a-!v-sdC@aGe.Ba0CHJGe>-sjC@gBu9RkTBY^-$s"#,
    r#"XC_CHPBu(RkZBY~-$yRkf-q*E#aM0IGJrE#gSS/-q;D^GL*]GJxJx,Rk4-q[D^ML*}-q|D^SM0Udo;E%8L+DBZgD^r"#,
    r#"H(}c66DL=Ni!-rPI*zG`,BZmDL^H)D-rVI*5GM2Y4$DL~G`=X:vDMEH)JXBeD`oGM8T.1DMXG`^S"kD`uGM&SRTDMd"#,
    r#"C^=RjCCf5IyzOPZH~fCK8NhIN4FH)iMy]Cf#BcrL)%H~lCK&Iw}Cf*C^~H&,H~r-uaG_2Cf;BcxGLlCf[CK.C]8DOU"#,
    r#"-ugCJrI,`Bc3BbaCgD-um-tMH~)CLGGL=CgJ-u#-tSDOgRm7-tYCgPL.ZBb&D|:L.f-txDO5G}O-vuCgoGO}-v0HSL"#,
    r#"GPD-x@M;<CNDU7^HSRBe=U7~M;]-w8U8EHSX-w&PC3HSdD)/U8dCiAD)?PC9IA%Jj1PC(Bz:D)`JkbHSwD*APDBIA,"#,
    r#"D*GJkhBz@D*TJknCiMD*ZD*"Bz{D*fJk$CiSD*lD+FB0BD*4D+LDQ2D*!D+kCilI3bZulDQ8I3hC}7B0UOWHZurCir"#,
    r#"I3nU!aB0aOWNT@JME4I3tU!gR!eI3zT@PME!D,QPE~ME)Jl[OW.HUtC}"PFEM>TI3$OW>GmcJl|Jm9HUzC~FI4sGmi"#,
    r#"I3+Jm(HU5C~LI4yGmoI3<D.hCkiC~RC"QIDID,oD.nB2RC~XC"WCkoD,1eg]-.AJmbCRnB2XC~kCRtCkuI4KZw,-.G"#,
    r#"C~qY&2B2dD,%U$8-.MC~wT]rDS}D,"TJaCk,C~/PHgB22Np.OZP-.lNp>Nq~MG"Np_JpEMHFNp"I6>HW?I59H<9Go!"#,
    r#"H;sD:(HW`NqSDByGo)OYpCThCm)H;yBlTB4zNqYHD_Cm:H;4BlZ-:iI5?BlfB45H;!CT/-:oD/yBl4MJhDAh-4"HZW"#,
    r#"D/4GX$GrFJoe-5FCpLCSQGX+B6`DAn-5L-<)D/!-5RE=vCSWBn1E=1DAt-5kEGbD/)Bn7J$BCSc-5qEGhDAz-7hEGn"#,
    r#"D/|GaHE?[DA+-7nEG$D:C-7tDaHCS1Bp|I^.DA<-7+DaNCS7-9(I^>Sca-9/DaTScg-$KDaZScmP}FEI9NsPP}LDas"#,
    r#"M9~Ke)EI(Sc#Ke:DayM!EE$oIM0NsbE$uN+aM!KU:yIM6I8EP"nIM$Oa*PRWDcpH=>KhLI{PNs0Jy`CuYHE9E&:IM~"#,
    r#"H=_D_5CueI8QDL@Dc1HE(Cf8CukH="Cf&ELEHE/BzoDc>D;_HSOCu9Jq6BzuM"GDC(Bz0M"MI8pCiDIO{CUyBz=Hg*"#,
    r#"DC/-,UIPBD<FGl`Hg;Bmh-,aDe;CU4GmACw6DC?-,gDe[Bmn-,mB&pCU!B1:Cw$D<e-,5B&vDDNB1@NBoCU|-,#IRd"#,
    r#"Bm+-/2HjMXO,GocDhSXO=-/8CzBSe8-/&B);RwrB4RFA)Se&-:AFA:Rwx-;}EUwNux-<DJ>WM$gDaKEU2Nu3Ct[EU8"#,
    r#"L]PCt|FDLM$mB%9EU`L]VHgjJHCI!mB%(JHIH@VB%/EW]I!sCwYDo%HHEB&HEW}H@bB)EDo,GY>B)KN_v"#,
).as_bytes();

/// Row start pattern, identical for every row.
pub const START_RUNS: [u8; 8] = [8, 1, 1, 1, 1, 1, 1, 3];

/// Left row indicator codeword of each row.
pub const ROW_INDICATORS: [u16; 8] = [2, 7, 1, 32, 37, 31, 62, 67];

/// Generator polynomial coefficients for 8 error correction codewords,
/// lowest degree first. The leading coefficient is kept apart in [ECC_L2_LEAD].
pub const ECC_L2: [u16; 8] = [308, 436, 284, 646, 653, 428, 379, 1];
pub const ECC_L2_LEAD: u16 = 237;
